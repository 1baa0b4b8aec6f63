// File: crates/tsplot-core/src/layout.rs
// Summary: Canvas sizing from measured text: scale columns, legend width, tick rows and appendix lines.
// Notes:
// - Everything here is computed before a surface is allocated; the renderer
//   only reads the resulting `Layout`.

use skia_safe as skia;

use crate::config::{Appendix, PlotConfig};
use crate::geometry::CoordinateMapper;
use crate::scale::{Scales, ValueRange};
use crate::series::DataSeries;
use crate::text::TextMeasure;
use crate::types::{APPENDIX_PADDING, LEGEND_PADDING, RULE_GAP, SCALE_COLUMN_PADDING};

#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    pub value: f64,
    pub text: String,
}

/// One vertical scale printed to the right of the plot.
#[derive(Clone, Debug)]
pub struct ScaleColumn {
    /// Owning series, or `None` for the shared column of a joined scale.
    pub series: Option<usize>,
    pub color: skia::Color,
    pub range: ValueRange,
    /// `tick_count + 1` labels from the range maximum down to its minimum.
    pub labels: Vec<TickLabel>,
    /// Left edge in canvas pixels.
    pub left: f32,
    pub width: f32,
}

#[derive(Clone, Debug)]
pub struct Layout {
    pub sample_count: usize,
    pub mapper: CoordinateMapper,
    pub tick_count: usize,
    pub columns: Vec<ScaleColumn>,
    /// Widest legend description.
    pub description_width: f32,
    pub right_panel_width: f32,
    pub width: i32,
    /// Height of the plot canvas before any appendix is added.
    pub height: i32,
    pub appendix_lines: Vec<String>,
    /// Final image height including appendix lines.
    pub total_height: i32,
}

impl Layout {
    /// X position of the rule separating scales from the legend.
    pub fn rule_x(&self) -> f32 {
        self.columns_right() + RULE_GAP
    }

    /// X position where legend swatches start.
    pub fn legend_x(&self) -> f32 {
        self.rule_x() + RULE_GAP
    }

    fn columns_right(&self) -> f32 {
        let plot = self.mapper.plot_rect();
        self.columns.last().map(|c| c.left + c.width).unwrap_or(plot.right)
    }
}

/// Number of tick intervals on every vertical scale, never less than one.
pub fn tick_count(plot_height: f32, font_height: f32) -> usize {
    let n = (plot_height / (2.0 * font_height)).floor();
    if n < 1.0 {
        log::warn!("plot height {plot_height} fits no tick rows at font height {font_height}; using one");
        1
    } else {
        n as usize
    }
}

/// Character width scale labels are padded to for `range`.
pub fn tick_label_width(range: ValueRange, integer: bool) -> usize {
    // Non-finite ranges are rejected before rendering; cap them here so sizing cannot overflow.
    let magnitude = range.max.abs().max(range.min.abs()).clamp(1.0, f64::MAX);
    (magnitude.log10().floor() as usize).saturating_add(if integer { 1 } else { 4 })
}

/// Format one tick value, right-aligned to `width` characters.
pub fn format_tick(value: f64, integer: bool, width: usize) -> String {
    if integer {
        format!("{:>width$}", value.trunc() as i64)
    } else {
        format!("{value:>width$.2}")
    }
}

/// Tick labels for `range` with `ticks` intervals.
pub fn tick_labels(range: ValueRange, integer: bool, ticks: usize) -> Vec<TickLabel> {
    let width = tick_label_width(range, integer);
    range
        .tick_values(ticks)
        .into_iter()
        .map(|value| TickLabel { value, text: format_tick(value, integer, width) })
        .collect()
}

/// Greedy word wrap of an appendix so that every line fits `max_width`.
///
/// The first line starts with `"<label>> "`, later lines are indented to match.
/// A single word wider than `max_width` gets a line of its own.
pub fn wrap_appendix<M: TextMeasure + ?Sized>(
    appendix: &Appendix,
    max_width: f32,
    metrics: &M,
    size: f32,
) -> Vec<String> {
    let prefix = format!("{}> ", appendix.label);
    let indent = " ".repeat(prefix.chars().count());
    let mut lines = Vec::new();
    let mut line = prefix;
    let mut empty = true;
    for word in appendix.body.split_whitespace() {
        let candidate = if empty { format!("{line}{word}") } else { format!("{line} {word}") };
        if !empty && metrics.text_width(&candidate, size) > max_width {
            lines.push(std::mem::replace(&mut line, format!("{indent}{word}")));
        } else {
            line = candidate;
        }
        empty = false;
    }
    if !empty {
        lines.push(line);
    }
    lines
}

/// Sizes the canvas and its auxiliary columns for one render pass.
pub struct LayoutEngine<'a, M: TextMeasure + ?Sized> {
    config: &'a PlotConfig,
    metrics: &'a M,
}

impl<'a, M: TextMeasure + ?Sized> LayoutEngine<'a, M> {
    pub fn new(config: &'a PlotConfig, metrics: &'a M) -> Self {
        Self { config, metrics }
    }

    pub fn tick_count(&self) -> usize {
        tick_count(self.config.plot_height(), self.config.font_height)
    }

    /// Lay out `series` (all of equal length) under `scales`.
    pub fn compute(&self, series: &[DataSeries], scales: &Scales, appendix: Option<&Appendix>) -> Layout {
        let cfg = self.config;
        let size = cfg.font_height;
        let sample_count = series.iter().map(DataSeries::len).max().unwrap_or(0);
        let mapper = CoordinateMapper::new(sample_count, cfg.width_factor, cfg.border, cfg.height);
        let plot = mapper.plot_rect();
        let ticks = self.tick_count();
        let visible: Vec<(usize, &DataSeries)> =
            series.iter().enumerate().filter(|(_, s)| s.is_visible()).collect();

        let mut columns = Vec::new();
        let mut left = plot.right;
        match scales {
            Scales::Joined(group) => {
                let integer = !visible.is_empty() && visible.iter().all(|(_, s)| s.is_integer_scale());
                let column = self.column(None, cfg.text_color, group.range(), integer, ticks, left);
                columns.push(column);
            }
            Scales::Independent => {
                for &(i, s) in &visible {
                    let column = self.column(Some(i), s.color(), s.range(), s.is_integer_scale(), ticks, left);
                    left += column.width;
                    columns.push(column);
                }
            }
        }

        let description_width = visible
            .iter()
            .map(|(_, s)| self.metrics.text_width(s.description(), size))
            .fold(0.0f32, f32::max);
        let scales_width: f32 = columns.iter().map(|c| c.width).sum();
        let right_panel_width = description_width + LEGEND_PADDING + scales_width;
        let width = (plot.width() + 2.0 * cfg.border as f32 + right_panel_width).ceil() as i32;

        let appendix_lines = appendix
            .map(|a| wrap_appendix(a, plot.width(), self.metrics, size))
            .unwrap_or_default();
        let total_height = if appendix_lines.is_empty() {
            cfg.height
        } else {
            (cfg.height as f32 + (size + 1.0) * appendix_lines.len() as f32 + APPENDIX_PADDING).ceil() as i32
        };

        log::debug!(
            "layout: {sample_count} samples, {ticks} ticks, {} scale columns, canvas {width}x{total_height}",
            columns.len()
        );

        Layout {
            sample_count,
            mapper,
            tick_count: ticks,
            columns,
            description_width,
            right_panel_width,
            width,
            height: cfg.height,
            appendix_lines,
            total_height,
        }
    }

    fn column(
        &self,
        series: Option<usize>,
        color: skia::Color,
        range: ValueRange,
        integer: bool,
        ticks: usize,
        left: f32,
    ) -> ScaleColumn {
        let labels = tick_labels(range, integer, ticks);
        let widest = labels
            .iter()
            .map(|l| self.metrics.text_width(&l.text, self.config.font_height))
            .fold(0.0f32, f32::max);
        ScaleColumn { series, color, range, labels, left, width: widest + SCALE_COLUMN_PADDING }
    }
}
