// File: crates/tsplot-core/src/config.rs
// Summary: Render configuration (dimensions, colors, scale joining) and caller-supplied plot text.

use chrono::NaiveDateTime;
use skia_safe as skia;

use crate::error::{PlotError, Result};
use crate::theme::Theme;
use crate::types::{BORDER, FONT_HEIGHT, HEIGHT};

#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Canvas height in pixels, borders included.
    pub height: i32,
    /// Horizontal pixels per sample.
    pub width_factor: f64,
    pub font_height: f32,
    pub border: u32,
    pub background: skia::Color,
    pub text_color: skia::Color,
    pub grid_color: skia::Color,
    /// Normalize every series with one shared range.
    pub join_scales: bool,
    /// Draw text. Layout still measures it when disabled.
    pub draw_labels: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::from_theme(&Theme::dark())
    }
}

impl PlotConfig {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            height: HEIGHT,
            width_factor: 1.0,
            font_height: FONT_HEIGHT,
            border: BORDER,
            background: theme.background,
            text_color: theme.text,
            grid_color: theme.grid,
            join_scales: false,
            draw_labels: true,
        }
    }

    pub fn with_height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    pub fn with_width_factor(mut self, width_factor: f64) -> Self {
        self.width_factor = width_factor;
        self
    }

    pub fn with_font_height(mut self, font_height: f32) -> Self {
        self.font_height = font_height;
        self
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    pub fn with_joined_scales(mut self, join: bool) -> Self {
        self.join_scales = join;
        self
    }

    pub fn with_labels(mut self, draw: bool) -> Self {
        self.draw_labels = draw;
        self
    }

    /// Height of the plot rectangle between the top and bottom borders.
    pub fn plot_height(&self) -> f32 {
        self.height as f32 - 2.0 * self.border as f32
    }

    pub fn validate(&self) -> Result<()> {
        if self.plot_height() <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "height {} leaves no room inside a {} px border",
                self.height, self.border
            )));
        }
        if !(self.width_factor.is_finite() && self.width_factor > 0.0) {
            return Err(PlotError::InvalidConfig(format!(
                "width factor must be positive, got {}",
                self.width_factor
            )));
        }
        if !(self.font_height.is_finite() && self.font_height > 0.0) {
            return Err(PlotError::InvalidConfig(format!(
                "font height must be positive, got {}",
                self.font_height
            )));
        }
        Ok(())
    }
}

/// Text printed beneath the plot by growing the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appendix {
    pub label: String,
    pub body: String,
}

/// Caller-supplied text around the plot. Nothing here is read from the host.
#[derive(Clone, Debug, Default)]
pub struct PlotMetadata {
    /// Appended to the sample count on the first header line.
    pub title: Option<String>,
    /// Suffix printed after summary values, e.g. a currency sign.
    pub unit: String,
    pub generated_at: Option<NaiveDateTime>,
    /// Describes the machine or environment that produced the data.
    pub environment: Option<String>,
    pub footer: Vec<String>,
    /// Opaque description of the data source.
    pub provenance: Option<String>,
    pub appendix: Option<Appendix>,
}

impl PlotMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn generated(mut self, at: NaiveDateTime, environment: impl Into<String>) -> Self {
        self.generated_at = Some(at);
        self.environment = Some(environment.into());
        self
    }

    pub fn with_footer_line(mut self, line: impl Into<String>) -> Self {
        self.footer.push(line.into());
        self
    }

    pub fn with_provenance(mut self, provenance: impl Into<String>) -> Self {
        self.provenance = Some(provenance.into());
        self
    }

    pub fn with_appendix(mut self, label: impl Into<String>, body: impl Into<String>) -> Self {
        self.appendix = Some(Appendix { label: label.into(), body: body.into() });
        self
    }
}

/// Short vertical tick centred on a series value at one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub series: usize,
    pub index: usize,
    pub color: skia::Color,
}
