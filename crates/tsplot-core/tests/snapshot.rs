// File: crates/tsplot-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small charts to PNG bytes with text disabled.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use tsplot_core::{Chart, Color, DataSeries, PlotConfig};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn config() -> PlotConfig {
    // avoid text nondeterminism across platforms
    PlotConfig::default().with_height(240).with_width_factor(6.0).with_labels(false)
}

fn waves() -> Vec<DataSeries> {
    let a: Vec<f64> = (0..40).map(|i| (i as f64 * 0.3).sin()).collect();
    let b: Vec<f64> = (0..40).map(|i| 10.0 + (i as f64 * 0.15).cos() * 4.0).collect();
    vec![
        DataSeries::new("sin", Color::from_argb(255, 80, 255, 80), a),
        DataSeries::new("cos", Color::from_argb(255, 80, 128, 255), b),
    ]
}

#[test]
fn golden_independent_scales() {
    let chart = Chart::with_series(waves()).unwrap();
    let bytes = chart.render_to_png_bytes(&config()).expect("render bytes");
    write_or_compare("independent.png", &bytes);
}

#[test]
fn golden_joined_scales() {
    let chart = Chart::with_series(waves()).unwrap();
    let bytes = chart.render_to_png_bytes(&config().with_joined_scales(true)).expect("render bytes");
    write_or_compare("joined.png", &bytes);
}

#[test]
fn render_is_deterministic() {
    let chart = Chart::with_series(waves()).unwrap();
    let first = chart.render_to_png_bytes(&config()).unwrap();
    let second = chart.render_to_png_bytes(&config()).unwrap();
    let a = image::load_from_memory(&first).unwrap().to_rgba8();
    let b = image::load_from_memory(&second).unwrap().to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
