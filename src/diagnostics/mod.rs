//! Structured record of a pipeline run.
//!
//! `PrepReport` carries the output grid together with the quantities the
//! stages computed along the way, so callers and the CLI can inspect or
//! dump them as JSON without re-running anything.
pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::image::IntensityField;
use crate::pipeline::PipelineMode;
use crate::stages::{Centroid, Translation};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepReport {
    /// Final `image_size × image_size` grid in `[0, 1]`.
    pub grid: IntensityField,
    pub mode: PipelineMode,
    /// Total intensity of the grayscale field entering the spatial stages
    /// (canvas resolution for blur + recenter, grid resolution for bilinear).
    pub input_mass: f64,
    /// Centroid of the resized field, before recentering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<Centroid>,
    /// Shift applied by the recenter stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<Translation>,
    /// The blank-canvas path was taken and recentering skipped.
    pub zero_mass: bool,
    pub timings: TimingBreakdown,
}

impl PrepReport {
    /// Consume the report, keeping only the grid.
    pub fn into_grid(self) -> IntensityField {
        self.grid
    }
}
