// File: crates/tsplot-core/src/lib.rs
// Summary: Core library entry point; exports public API for series, scales, layout and rendering.

pub mod chart;
pub mod config;
pub mod derive;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::Chart;
pub use config::{Appendix, Marker, PlotConfig, PlotMetadata};
pub use derive::{abs_diff, derive};
pub use error::{PlotError, Result};
pub use geometry::{CoordinateMapper, RectF};
pub use layout::{Layout, LayoutEngine, ScaleColumn, TickLabel};
pub use scale::{ScaleGroup, Scales, ValueRange};
pub use series::DataSeries;
pub use text::{FixedAdvance, TextMeasure, TextShaper};
pub use theme::Theme;

/// Re-exported so callers can name colors without depending on skia-safe directly.
pub use skia_safe::Color;
