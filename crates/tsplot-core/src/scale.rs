// File: crates/tsplot-core/src/scale.rs
// Summary: Value ranges, unit-interval transforms and shared-scale joining.

use crate::series::DataSeries;

/// Closed value range used to normalize samples into [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range over the finite members of `samples`.
    ///
    /// NaN and infinite samples are ignored. When nothing numeric remains the range
    /// collapses to `(0, 0)`: an undefined `min` becomes 0 and an undefined
    /// `max` then takes `min`.
    pub fn of_samples(samples: impl IntoIterator<Item = f64>) -> Self {
        let mut min = f64::NAN;
        let mut max = f64::NAN;
        for v in samples.into_iter().filter(|v| v.is_finite()) {
            // f64::min/max return the non-NaN operand, so the first sample seeds both.
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_nan() {
            min = 0.0;
        }
        if max.is_nan() {
            max = min;
        }
        Self { min, max }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Map `v` into the unit interval; a zero-width range maps everything to 0.
    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let span = self.span();
        if span.is_finite() {
            (v - self.min) / span
        } else {
            // max - min overflows for finite ranges wider than f64::MAX; halves do not.
            (v / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }

    /// Smallest range covering both.
    pub fn union(self, other: Self) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// `ticks + 1` evenly spaced values from `max` down to `min`, both included.
    pub fn tick_values(&self, ticks: usize) -> Vec<f64> {
        let n = ticks.max(1);
        let wide = !self.span().is_finite();
        (0..=n)
            .map(|i| match i {
                // Pin the ends so rounding never moves them off the range.
                0 => self.max,
                i if i == n => self.min,
                i if wide => {
                    let t = (n - i) as f64 / n as f64;
                    self.min * (1.0 - t) + self.max * t
                }
                i => self.min + (n - i) as f64 * self.span() / n as f64,
            })
            .collect()
    }
}

/// One normalization range shared by several series.
///
/// Joining never touches the participating series; the group is consulted as
/// an effective override wherever a series' own range would be used.
#[derive(Clone, Debug)]
pub struct ScaleGroup {
    range: ValueRange,
    bounds: Option<(f64, f64)>,
}

impl ScaleGroup {
    /// Join the ranges of `series`; `None` when there is nothing to join.
    pub fn join<'a>(series: impl IntoIterator<Item = &'a DataSeries>) -> Option<Self> {
        series
            .into_iter()
            .map(DataSeries::range)
            .reduce(ValueRange::union)
            .map(|range| Self { range, bounds: None })
    }

    /// Join `series` and force the result to cover `[y_min, y_max]`.
    ///
    /// Two invisible bound series, as long as the longest participant and
    /// holding `y_min` and `y_max`, are added to the join.
    pub fn join_with_bounds<'a>(
        series: impl IntoIterator<Item = &'a DataSeries>,
        y_min: f64,
        y_max: f64,
    ) -> Self {
        let series: Vec<&DataSeries> = series.into_iter().collect();
        let len = series.iter().map(|s| s.len()).max().unwrap_or(1).max(1);
        let lower = DataSeries::bound(y_min, len);
        let upper = DataSeries::bound(y_max, len);
        let range = series
            .into_iter()
            .map(DataSeries::range)
            .chain([upper.range()])
            .fold(lower.range(), ValueRange::union);
        log::debug!("joined scale forced to [{y_min}, {y_max}] -> [{}, {}]", range.min, range.max);
        Self { range, bounds: Some((y_min, y_max)) }
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Bounds requested through [`ScaleGroup::join_with_bounds`], if any.
    pub fn forced_bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    #[inline]
    pub fn transform(&self, v: f64) -> f64 {
        self.range.normalize(v)
    }
}

/// Effective scale of every series in one render pass.
#[derive(Clone, Debug)]
pub enum Scales {
    /// Each series normalizes with its own range.
    Independent,
    /// All series normalize with the group's range.
    Joined(ScaleGroup),
}

impl Scales {
    pub fn range_of(&self, series: &DataSeries) -> ValueRange {
        match self {
            Scales::Independent => series.range(),
            Scales::Joined(group) => group.range(),
        }
    }

    #[inline]
    pub fn transform(&self, series: &DataSeries, v: f64) -> f64 {
        self.range_of(series).normalize(v)
    }

    pub fn is_joined(&self) -> bool {
        matches!(self, Scales::Joined(_))
    }
}
