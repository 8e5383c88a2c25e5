// File: crates/stencil-plots/src/bin/plot_correct.rs
// Summary: Renders the digits-of-correctness chart across all stencil variants.

use anyhow::{Context, Result};
use barchart_core::{palette, BarSeries, Chart, RenderOptions};

// One entry per stencil variant, in display order. Negative entries mean
// fewer correct digits than the reference.
const BARS: [(&str, f64); 16] = [
    ("LTR 5pt", -3.463893769),
    ("LTR 7pt", -5.830626289),
    ("LTR 9pt", -8.410524206),
    ("LTR 13pt", -11.00073912),
    ("LTR 25pt", -20.11099575),
    ("LTR 27pt", -8.130186283),
    ("LTR 125pt", -109.6599942),
    ("LTR Poisson", 0.4275563709),
    ("Bal 5pt", -4.168145764),
    ("Bal 7pt", -4.045837161),
    ("Bal 9pt", -8.012350567),
    ("Bal 13pt", -8.393081138),
    ("Bal 25pt", -21.41607738),
    ("Bal 27pt", -8.042157422),
    ("Bal 125pt", -109.2714124),
    ("Bal Poisson", 0.3253872367),
];

fn main() -> Result<()> {
    let bars = BarSeries::from_pairs(&BARS).context("building correctness bars")?;
    let chart = Chart::new(bars, "Abs Error (64-bit)", palette::find("Pastel1")?);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/correct_digits_64bit.png");
    chart.render_to_png(&opts, &out).context("rendering PNG")?;
    chart
        .render_to_svg(&opts, out.with_extension("svg"))
        .context("rendering SVG")?;
    println!("Wrote {}", out.display());
    Ok(())
}
