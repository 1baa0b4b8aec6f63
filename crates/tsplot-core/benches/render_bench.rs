use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsplot_core::{Chart, Color, DataSeries, PlotConfig};

fn build_chart(n: usize) -> Chart {
    let rate: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)).collect();
    let budget: Vec<f64> = (0..n).map(|i| 1000.0 + i as f64 * 0.5).collect();
    Chart::with_series([
        DataSeries::new("rate", Color::GREEN, rate),
        DataSeries::new("budget", Color::BLUE, budget),
    ])
    .expect("equal lengths")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 5_000usize] {
        group.bench_function(format!("two_series_{n}"), |b| {
            let ch = build_chart(n);
            let cfg = PlotConfig::default().with_height(500).with_labels(false);
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&cfg)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
