// File: crates/tsplot-core/src/error.rs
// Summary: Error taxonomy for chart construction, layout, rendering and publishing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("chart has no series to plot")]
    NoSeries,

    /// Every series in one render pass must have the same sample count.
    #[error("series '{description}' has {actual} samples, expected {expected}")]
    ShapeMismatch {
        description: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid plot config: {0}")]
    InvalidConfig(String),

    #[error("marker references series {series} at sample {index}, which does not exist")]
    MarkerOutOfRange { series: usize, index: usize },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;
