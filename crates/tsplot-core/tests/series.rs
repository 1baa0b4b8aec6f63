// File: crates/tsplot-core/tests/series.rs
// Purpose: Validate series ranges, boundary values and the degenerate-range transform.

use tsplot_core::{abs_diff, derive, Color, DataSeries};

#[test]
fn constant_series_transforms_to_zero() {
    let s = DataSeries::new("flat", Color::WHITE, vec![7.5; 4]);
    assert_eq!((s.min(), s.max()), (7.5, 7.5));
    for &v in s.samples() {
        assert_eq!(s.transform(v), 0.0);
    }
    // Any input, not only the series' own samples.
    assert_eq!(s.transform(-1e9), 0.0);
    assert_eq!(s.transform(f64::NAN), 0.0);
}

#[test]
fn fully_filtered_series_collapses_to_zero_range() {
    let s = DataSeries::filtered("none", Color::WHITE, vec![1.0, 2.0, 3.0], |_| false);
    assert_eq!((s.min(), s.max()), (0.0, 0.0));
    assert_eq!(s.first(), 0.0);
    assert_eq!(s.last(), 0.0);
    for v in [1.0, 2.0, 3.0, -4.0] {
        assert_eq!(s.transform(v), 0.0);
    }
    // Samples are still kept for plotting.
    assert_eq!(s.len(), 3);
}

#[test]
fn empty_and_all_missing_series_are_not_errors() {
    let empty = DataSeries::new("empty", Color::WHITE, Vec::<f64>::new());
    assert_eq!((empty.min(), empty.max()), (0.0, 0.0));

    let missing = DataSeries::from_options("missing", Color::WHITE, vec![None, None]);
    assert_eq!((missing.min(), missing.max()), (0.0, 0.0));
    assert_eq!(missing.transform(5.0), 0.0);
}

#[test]
fn range_ignores_missing_samples() {
    let s = DataSeries::new("gappy", Color::WHITE, vec![f64::NAN, 4.0, f64::NAN, -2.0, 10.0]);
    assert_eq!((s.min(), s.max()), (-2.0, 10.0));
    assert!((s.transform(4.0) - 0.5).abs() < 1e-12);
    assert!(s.transform(f64::NAN).is_nan());
}

#[test]
fn all_negative_series_keeps_its_range() {
    let s = DataSeries::new("neg", Color::WHITE, vec![-5.0, -3.0, -1.0]);
    assert_eq!((s.min(), s.max()), (-5.0, -1.0));
    assert_eq!(s.transform(-5.0), 0.0);
    assert_eq!(s.transform(-1.0), 1.0);
}

#[test]
fn first_and_last_come_from_filtered_samples() {
    let s = DataSeries::filtered(
        "rate",
        Color::WHITE,
        vec![f64::NAN, 3.0, 5.0, 4.0, f64::NAN],
        |v| !v.is_nan(),
    );
    assert_eq!(s.first(), 3.0);
    assert_eq!(s.last(), 4.0);
    assert_eq!((s.min(), s.max()), (3.0, 5.0));
}

#[test]
fn predicate_only_affects_range() {
    let s = DataSeries::filtered("capped", Color::WHITE, vec![1.0, 100.0, 3.0], |v| v < 50.0);
    assert_eq!((s.min(), s.max()), (1.0, 3.0));
    assert_eq!(s.get(1), 100.0);
    // Values beyond the range normalize past 1; the mapper clamps them later.
    assert!(s.transform(100.0) > 1.0);
}

#[test]
fn builder_flags() {
    let s = DataSeries::new("volume", Color::RED, vec![1.0, 2.0])
        .with_integer_scale()
        .with_summary("vol");
    assert!(s.is_integer_scale());
    assert_eq!(s.summary_label(), Some("vol"));
    assert_eq!(s.description(), "volume");
    assert_eq!(s.color(), Color::RED);
    assert!(s.is_visible());
    assert!(s.get(99).is_nan());
}

#[test]
fn abs_diff_with_zero_head() {
    assert_eq!(abs_diff(&[0.0, 0.0, 2.0, 2.0, 5.0], 0.0), vec![0.0, 0.0, 2.0, 0.0, 3.0]);
}

#[test]
fn derive_pairs_head_with_first_sample() {
    let out = derive(&[1, 4, 9], 0, |a, b| b - a);
    assert_eq!(out, vec![1, 3, 5]);
    assert!(derive(&[] as &[i32], 0, |a, b| a + b).is_empty());
}
