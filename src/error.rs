//! Error taxonomy shared by every pipeline stage.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrepError {
    /// The field entering the moment stage carries no intensity (blank canvas).
    /// The pipeline recovers from this by skipping the recenter stage.
    #[error("field has zero total mass; centroid is undefined")]
    ZeroMass,

    /// Canvas dimensions do not match the configured square canvas.
    #[error("expected a {expected}x{expected} canvas, got {width}x{height}")]
    InvalidDimensions {
        expected: usize,
        width: usize,
        height: usize,
    },

    /// Backing slice is shorter than the declared geometry requires.
    #[error("pixel buffer holds {actual} bytes, geometry requires {needed}")]
    BufferTooShort { needed: usize, actual: usize },

    /// Fewer than three colour channels per pixel.
    #[error("pixel buffer needs at least 3 colour channels, got {0}")]
    UnsupportedChannels(usize),

    /// Kernel size, sigma or resolution parameter out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
