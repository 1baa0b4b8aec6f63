// File: crates/tsplot-core/src/types.rs
// Summary: Shared layout constants (borders, paddings, tick geometry).

/// Default canvas height in pixels.
pub const HEIGHT: i32 = 1080;
/// Default border around the plot rectangle, in pixels.
pub const BORDER: u32 = 50;
/// Default font height in pixels.
pub const FONT_HEIGHT: f32 = 14.0;

/// Length of a scale tick mark.
pub const TICK_MARK_LEN: f32 = 10.0;
/// Gap between a tick mark's start and its label.
pub const TICK_LABEL_OFFSET: f32 = 11.0;
/// Added to the widest tick label to obtain a scale column width.
pub const SCALE_COLUMN_PADDING: f32 = 14.0;

/// Space on each side of the separator rule between scales and legend.
pub const RULE_GAP: f32 = 20.0;
/// Length of a legend color swatch.
pub const LEGEND_SWATCH_LEN: f32 = 24.0;
/// Offset of legend text from the swatch start.
pub const LEGEND_TEXT_OFFSET: f32 = 25.0;
/// Vertical gap between legend rows (added to font height).
pub const LEGEND_ROW_GAP: f32 = 4.0;
/// Fixed part of the right panel: both rule gaps plus the swatch.
pub const LEGEND_PADDING: f32 = 2.0 * RULE_GAP + LEGEND_TEXT_OFFSET;

/// Vertical grid lines are drawn every this many samples.
pub const VERTICAL_GRID_STEP: usize = 5;
/// Half height of an event marker, in normalized units.
pub const MARKER_HALF_HEIGHT: f64 = 0.02;

/// Offset of the footer below the plot's bottom border line.
pub const FOOTER_OFFSET: f32 = 2.0;
/// Extra pixels added below appendix text when re-hosting.
pub const APPENDIX_PADDING: f32 = 5.0;
