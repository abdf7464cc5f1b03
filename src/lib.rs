#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod kernel;
pub mod pipeline;

// Stage-level building blocks, usable on their own.
pub mod stages;

// Tool configuration for the bundled binaries.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::PrepReport;
pub use crate::error::PrepError;
pub use crate::pipeline::{prepare_digit, BlurMethod, PipelineMode, PrepParams, Preprocessor};

/// Default output resolution (MNIST).
pub const IMAGE_SIZE: usize = 28;
/// Default ratio between canvas side and output side.
pub const CANVAS_SCALE: usize = 10;
/// Default canvas side.
pub const CANVAS_SIZE: usize = IMAGE_SIZE * CANVAS_SCALE;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use digit_prep::prelude::*;
///
/// # fn main() -> Result<(), PrepError> {
/// let rgba = vec![255u8; CANVAS_SIZE * CANVAS_SIZE * 4];
/// let canvas = PixelBuffer::packed(CANVAS_SIZE, CANVAS_SIZE, 4, &rgba);
///
/// let prep = Preprocessor::new(PrepParams::default())?;
/// let report = prep.process(&canvas)?;
/// println!("zero_mass={} grid={}x{}", report.zero_mass, report.grid.w, report.grid.h);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{IntensityField, PixelBuffer};
    pub use crate::{PrepError, PrepParams, PrepReport, Preprocessor, CANVAS_SIZE, IMAGE_SIZE};
}
