// File: crates/tsplot-examples/src/bin/lines.rs
// Summary: Minimal example that renders synthetic series twice: independent scales, then joined with forced bounds.

use tsplot_core::{abs_diff, Chart, DataSeries, Marker, PlotConfig, PlotMetadata, Theme};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let theme = Theme::dark();
    let n = 240;

    // Build a few synthetic series
    let rate: Vec<f64> = (0..n)
        .map(|i| {
            let x = i as f64 / 10.0;
            x.sin() / 2.0 + 100.0 + (4.0 * x).cos() / 4.0 + (3.0 * x.sin()).sin() / 8.0
        })
        .collect();
    let holdings: Vec<f64> = (0..n).map(|i| ((i / 20) % 4) as f64).collect();
    let traded = abs_diff(&holdings, 0.0);
    let budget: Vec<f64> = rate.iter().zip(&holdings).map(|(r, h)| 400.0 + r * h).collect();

    let mut chart = Chart::with_series([
        DataSeries::new("Rate", theme.series_color(0), rate).with_summary("rate"),
        DataSeries::new("Budget", theme.series_color(1), budget).with_summary("bot"),
        DataSeries::new("Traded volume", theme.series_color(4), traded.clone()).with_integer_scale(),
    ])
    .expect("series share one length");
    for (i, _) in traded.iter().enumerate().filter(|&(_, &t)| t > 0.0) {
        chart.add_marker(Marker { series: 0, index: i, color: theme.series_color(5) });
    }
    let meta = PlotMetadata::new()
        .with_title("synthetic example")
        .with_unit("$")
        .with_appendix("note", "Markers on the rate line show samples where holdings changed.");
    chart.set_metadata(meta);

    let opts = PlotConfig::from_theme(&theme).with_height(600).with_width_factor(3.0);
    let out = std::path::PathBuf::from("target/out/example_lines.png");
    chart.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());

    chart.join_with_bounds(0.0, 1000.0);
    let out = std::path::PathBuf::from("target/out/example_lines_joined.png");
    chart.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
