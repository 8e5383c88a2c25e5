use barchart_core::{palette, BarSeries, Chart, LabeledValue, RenderOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_chart(n: usize) -> Chart {
    let bars = (0..n)
        .map(|i| LabeledValue::new(format!("case {i}"), (i as f64 * 0.37).sin() * 1e-14))
        .collect();
    let bars = BarSeries::new(bars).expect("valid bars");
    Chart::new(bars, "Render Bench", palette::find("deep").expect("palette"))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[16usize, 256usize] {
        group.bench_function(format!("bars_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| {
                let bytes = ch.render_to_png_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
