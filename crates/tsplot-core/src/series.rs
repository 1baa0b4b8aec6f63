// File: crates/tsplot-core/src/series.rs
// Summary: Named numeric series with its valid range, boundary values and unit transform.
// Notes:
// - `f64::NAN` is the "no value" sentinel. Missing samples leave a gap in the
//   rendered line; they never take part in range computation.
// - Series are immutable once built. Shared scales are applied through
//   `scale::Scales`, not by rewriting the series.

use skia_safe as skia;

use crate::scale::ValueRange;

#[derive(Clone, Debug)]
pub struct DataSeries {
    description: String,
    color: skia::Color,
    samples: Vec<f64>,
    range: ValueRange,
    first: f64,
    last: f64,
    integer_scale: bool,
    summary: Option<String>,
    visible: bool,
}

impl DataSeries {
    /// Series whose range covers every sample.
    pub fn new(
        description: impl Into<String>,
        color: skia::Color,
        samples: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self::filtered(description, color, samples, |_| true)
    }

    /// Series whose range, `first` and `last` only consider samples for which
    /// `include` holds. All samples are still plotted.
    pub fn filtered(
        description: impl Into<String>,
        color: skia::Color,
        samples: impl IntoIterator<Item = f64>,
        include: impl Fn(f64) -> bool,
    ) -> Self {
        let samples: Vec<f64> = samples.into_iter().collect();
        let kept: Vec<f64> = samples.iter().copied().filter(|&v| include(v)).collect();
        let range = ValueRange::of_samples(kept.iter().copied());
        // An entirely filtered-out series reports the collapsed range minimum.
        let first = kept.first().copied().unwrap_or(range.min);
        let last = kept.last().copied().unwrap_or(range.min);
        Self {
            description: description.into(),
            color,
            samples,
            range,
            first,
            last,
            integer_scale: false,
            summary: None,
            visible: true,
        }
    }

    /// Series built from optional samples; `None` becomes a gap.
    pub fn from_options(
        description: impl Into<String>,
        color: skia::Color,
        samples: impl IntoIterator<Item = Option<f64>>,
    ) -> Self {
        Self::new(description, color, samples.into_iter().map(|v| v.unwrap_or(f64::NAN)))
    }

    /// Invisible constant series used only to widen a joined scale.
    pub(crate) fn bound(value: f64, len: usize) -> Self {
        let mut s = Self::new(" ", skia::Color::TRANSPARENT, std::iter::repeat(value).take(len));
        s.visible = false;
        s
    }

    /// Print scale labels as integers instead of two-decimal values.
    pub fn with_integer_scale(mut self) -> Self {
        self.integer_scale = true;
        self
    }

    /// Track this series in the header summary under `label`.
    pub fn with_summary(mut self, label: impl Into<String>) -> Self {
        self.summary = Some(label.into());
        self
    }

    pub fn description(&self) -> &str { &self.description }
    pub fn color(&self) -> skia::Color { self.color }
    pub fn samples(&self) -> &[f64] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Sample at `index`, or NaN past the end.
    pub fn get(&self, index: usize) -> f64 {
        self.samples.get(index).copied().unwrap_or(f64::NAN)
    }

    pub fn range(&self) -> ValueRange { self.range }
    pub fn min(&self) -> f64 { self.range.min }
    pub fn max(&self) -> f64 { self.range.max }

    /// First sample that passed the inclusion predicate.
    pub fn first(&self) -> f64 { self.first }
    /// Last sample that passed the inclusion predicate.
    pub fn last(&self) -> f64 { self.last }

    /// Map a raw value into [0, 1] using this series' own range.
    pub fn transform(&self, v: f64) -> f64 {
        self.range.normalize(v)
    }

    pub fn is_integer_scale(&self) -> bool { self.integer_scale }
    pub fn summary_label(&self) -> Option<&str> { self.summary.as_deref() }
    pub fn is_visible(&self) -> bool { self.visible }
}
