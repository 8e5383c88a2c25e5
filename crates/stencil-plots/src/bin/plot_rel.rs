// File: crates/stencil-plots/src/bin/plot_rel.rs
// Summary: Renders the 64-bit relative error chart across all stencil variants.

use anyhow::{Context, Result};
use barchart_core::{palette, BarSeries, Chart, RenderOptions};

// One entry per stencil variant, in display order.
const BARS: [(&str, f64); 16] = [
    ("LTR 5pt", 1.73e-07),
    ("LTR 7pt", 1.98e-07),
    ("LTR 9pt", 2.07e-07),
    ("LTR 13pt", 2.58e-07),
    ("LTR 25pt", 4.49e-07),
    ("LTR 27pt", 2.10e-07),
    ("LTR 125pt", 2.25e-07),
    ("LTR Poisson", 1.97e-07),
    ("Bal 5pt", 1.40e-07),
    ("Bal 7pt", 1.76e-07),
    ("Bal 9pt", 1.78e-07),
    ("Bal 13pt", 1.64e-07),
    ("Bal 25pt", 1.44e-07),
    ("Bal 27pt", 1.50e-07),
    ("Bal 125pt", 2.40e-07),
    ("Bal Poisson", 1.75e-07),
];

fn main() -> Result<()> {
    let bars = BarSeries::from_pairs(&BARS).context("building rel error bars")?;
    let chart = Chart::new(bars, "Rel Error (64-bit)", palette::find("Pastel1")?);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/rel_error_64bit.png");
    chart.render_to_png(&opts, &out).context("rendering PNG")?;
    chart
        .render_to_svg(&opts, out.with_extension("svg"))
        .context("rendering SVG")?;
    println!("Wrote {}", out.display());
    Ok(())
}
