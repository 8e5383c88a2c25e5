// File: crates/stencil-plots/src/bin/plot_ulp.rs
// Summary: Renders the 64-bit ULP error chart across all stencil variants.

use anyhow::{Context, Result};
use barchart_core::{palette, BarSeries, Chart, RenderOptions};

// One entry per stencil variant, in display order. The Poisson variants
// carry signed (negative) ULP error.
const BARS: [(&str, f64); 16] = [
    ("LTR 5pt", 2.374755859),
    ("LTR 7pt", 3.249989805),
    ("LTR 9pt", 3.632258788),
    ("LTR 13pt", 6.489165551),
    ("LTR 25pt", 14.95517273),
    ("LTR 27pt", 3.659755838),
    ("LTR 125pt", 31.77391682),
    ("LTR Poisson", -0.669192569),
    ("Bal 5pt", 1.625305176),
    ("Bal 7pt", 2.049022357),
    ("Bal 9pt", 3.045052551),
    ("Bal 13pt", 3.325721574),
    ("Bal 25pt", 4.963671875),
    ("Bal 27pt", 2.490370811),
    ("Bal 125pt", 30.68415179),
    ("Bal Poisson", -0.5481679786),
];

fn main() -> Result<()> {
    let bars = BarSeries::from_pairs(&BARS).context("building ulp error bars")?;
    let chart = Chart::new(bars, "ULP Error (64-bit)", palette::find("Pastel1")?);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/ulp_error_64bit.png");
    chart.render_to_png(&opts, &out).context("rendering PNG")?;
    chart
        .render_to_svg(&opts, out.with_extension("svg"))
        .context("rendering SVG")?;
    println!("Wrote {}", out.display());
    Ok(())
}
