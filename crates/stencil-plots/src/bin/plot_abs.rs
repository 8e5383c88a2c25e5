// File: crates/stencil-plots/src/bin/plot_abs.rs
// Summary: Renders the 64-bit absolute error chart across all stencil variants.

use anyhow::{Context, Result};
use barchart_core::{palette, BarSeries, Chart, RenderOptions};

// One entry per stencil variant, in display order.
const BARS: [(&str, f64); 16] = [
    ("LTR 5pt", 1.05e-15),
    ("LTR 7pt", 2.16e-15),
    ("LTR 9pt", 3.23e-15),
    ("LTR 13pt", 5.76e-15),
    ("LTR 25pt", 1.66e-14),
    ("LTR 27pt", 3.25e-15),
    ("LTR 125pt", 4.94e-14),
    ("LTR Poisson", 1.49e-16),
    ("Bal 5pt", 1.08e-15),
    ("Bal 7pt", 1.36e-15),
    ("Bal 9pt", 2.70e-15),
    ("Bal 13pt", 2.95e-15),
    ("Bal 25pt", 5.51e-15),
    ("Bal 27pt", 2.21e-15),
    ("Bal 125pt", 4.77e-14),
    ("Bal Poisson", 1.22e-16),
];

fn main() -> Result<()> {
    let bars = BarSeries::from_pairs(&BARS).context("building abs error bars")?;
    let mut chart = Chart::new(bars, "Abs Error (64-bit)", palette::find("bright")?);
    chart.rotate_labels = true;
    chart.large_font = true;

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/abs_error_64bit.png");
    chart.render_to_png(&opts, &out).context("rendering PNG")?;
    chart
        .render_to_svg(&opts, out.with_extension("svg"))
        .context("rendering SVG")?;
    println!("Wrote {}", out.display());
    Ok(())
}
