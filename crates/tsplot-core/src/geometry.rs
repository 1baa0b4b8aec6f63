// File: crates/tsplot-core/src/geometry.rs
// Summary: Plot rectangle and fractional-to-pixel coordinate mapping.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// NaN passes through unchanged.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Maps fractional `(fx, fy)` in [0, 1]² onto the plot rectangle of a bordered canvas.
///
/// Inputs outside the unit square are clamped onto its edges, so a mapped
/// point never leaves the plot rectangle. Only NaN escapes, and callers treat
/// it as a missing point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    plot: RectF,
}

impl CoordinateMapper {
    pub fn new(sample_count: usize, width_factor: f64, border: u32, canvas_height: i32) -> Self {
        let b = border as f32;
        let width = (sample_count as f64 * width_factor) as f32;
        let height = canvas_height as f32 - 2.0 * b;
        Self { plot: RectF::from_ltwh(b, b, width, height) }
    }

    pub fn plot_rect(&self) -> RectF { self.plot }

    #[inline]
    pub fn x(&self, fx: f64) -> f32 {
        self.plot.left + (clamp(fx, 0.0, 1.0) * self.plot.width() as f64) as f32
    }

    #[inline]
    pub fn y(&self, fy: f64) -> f32 {
        self.plot.top + ((1.0 - clamp(fy, 0.0, 1.0)) * self.plot.height() as f64) as f32
    }

    /// Pixel position of `(fx, fy)`, or `None` when either coordinate is NaN.
    pub fn map(&self, fx: f64, fy: f64) -> Option<(f32, f32)> {
        let (x, y) = (self.x(fx), self.y(fy));
        if x.is_nan() || y.is_nan() { None } else { Some((x, y)) }
    }
}
