//! Canvas → model-input normalization.
//!
//! [`Preprocessor`] owns validated parameters and the Gaussian kernel they
//! imply; it holds no other state, so one instance can serve concurrent
//! calls. Every intermediate field is dropped as soon as the next stage has
//! consumed it, bounding peak memory to two canvas-sized buffers.
//!
//! The canonical variant blurs at canvas resolution and then resizes. This
//! acts as the anti-aliasing filter for the nearest-neighbour decimation at
//! O(canvas² · k) cost; resizing first would be cheaper but samples the raw
//! stroke and aliases thin lines.
pub mod params;

pub use params::{BlurMethod, PipelineMode, PrepParams};

use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{PrepReport, TimingBreakdown};
use crate::error::PrepError;
use crate::image::{IntensityField, PixelBuffer};
use crate::kernel::GaussianKernel;
use crate::stages::grayscale::rgb_to_intensity;
use crate::stages::{
    center_of_mass, clamp_unit, convolve2d, field_center, gaussian_blur, resize_bilinear_rgb,
    resize_nearest, shift_field, to_intensity, Translation,
};
use log::debug;
use std::time::Instant;

#[derive(Clone, Debug)]
pub struct Preprocessor {
    params: PrepParams,
    kernel: GaussianKernel,
}

impl Preprocessor {
    /// Validate `params` and build the blur kernel once.
    pub fn new(params: PrepParams) -> Result<Self, PrepError> {
        params.validate()?;
        let kernel = GaussianKernel::new(params.resolved_kernel_size(), params.resolved_sigma())?;
        Ok(Self { params, kernel })
    }

    pub fn params(&self) -> &PrepParams {
        &self.params
    }

    pub fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    /// Run the configured pipeline and return the grid with diagnostics.
    pub fn process(&self, canvas: &PixelBuffer<'_>) -> Result<PrepReport, PrepError> {
        self.check_canvas(canvas)?;
        let start = Instant::now();
        let mut report = match self.params.mode {
            PipelineMode::BlurRecenter => self.run_blur_recenter(canvas)?,
            PipelineMode::BilinearResize => self.run_bilinear(canvas),
        };
        report.timings.total_ms = elapsed_ms(start);
        debug!(
            "Preprocessor::process mode={:?} mass={:.3} zero_mass={} total_ms={:.3}",
            report.mode, report.input_mass, report.zero_mass, report.timings.total_ms
        );
        Ok(report)
    }

    /// Run the pipeline and keep only the output grid.
    pub fn prepare(&self, canvas: &PixelBuffer<'_>) -> Result<IntensityField, PrepError> {
        Ok(self.process(canvas)?.into_grid())
    }

    fn check_canvas(&self, canvas: &PixelBuffer<'_>) -> Result<(), PrepError> {
        let expected = self.params.canvas_size();
        if canvas.w != expected || canvas.h != expected {
            return Err(PrepError::InvalidDimensions {
                expected,
                width: canvas.w,
                height: canvas.h,
            });
        }
        canvas.validate()
    }

    fn blur(&self, field: &IntensityField) -> IntensityField {
        match self.params.blur_method {
            BlurMethod::Separable => gaussian_blur(field, &self.kernel),
            BlurMethod::Direct => convolve2d(field, &self.kernel),
        }
    }

    fn run_blur_recenter(&self, canvas: &PixelBuffer<'_>) -> Result<PrepReport, PrepError> {
        let size = self.params.image_size;
        let mut timings = TimingBreakdown::default();

        let intensity = timings.time("grayscale", || to_intensity(canvas));
        let input_mass = intensity.total_mass();

        let blurred = timings.time("blur", || self.blur(&intensity));
        drop(intensity);
        debug!(
            "blur: {}x{} kernel={} sigma={:.3}",
            blurred.w,
            blurred.h,
            self.kernel.size(),
            self.kernel.sigma()
        );

        let small = timings.time("resize", || resize_nearest(&blurred, size, size));
        drop(blurred);

        let moments = timings.time("moments", || center_of_mass(&small));
        let (centered, centroid, shift) = match moments {
            Ok(centroid) => {
                let shift = Translation::toward(field_center(&small), centroid);
                debug!(
                    "recenter: centroid=({:.3}, {:.3}) shift=({}, {})",
                    centroid.row, centroid.col, shift.d_row, shift.d_col
                );
                let shifted = if shift.is_identity() {
                    small
                } else {
                    let shifted = timings.time("recenter", || shift_field(&small, shift));
                    drop(small);
                    shifted
                };
                (shifted, Some(centroid), Some(shift))
            }
            Err(PrepError::ZeroMass) => {
                debug!("recenter: zero-mass field, skipping shift");
                (small, None, None)
            }
            Err(err) => return Err(err),
        };

        let grid = timings.time("clamp", || clamp_unit(centered));
        Ok(PrepReport {
            grid,
            mode: PipelineMode::BlurRecenter,
            input_mass,
            zero_mass: centroid.is_none(),
            centroid,
            shift,
            timings,
        })
    }

    fn run_bilinear(&self, canvas: &PixelBuffer<'_>) -> PrepReport {
        let size = self.params.image_size;
        let mut timings = TimingBreakdown::default();

        let samples = timings.time("resize", || resize_bilinear_rgb(canvas, size, size));
        let small = timings.time("grayscale", || rgb_to_intensity(size, size, &samples));
        drop(samples);
        let input_mass = small.total_mass();

        let grid = timings.time("clamp", || clamp_unit(small));
        PrepReport {
            grid,
            mode: PipelineMode::BilinearResize,
            input_mass,
            centroid: None,
            shift: None,
            zero_mass: input_mass <= 0.0,
            timings,
        }
    }
}

/// One-shot helper: build a [`Preprocessor`] for `params` and prepare `canvas`.
pub fn prepare_digit(
    canvas: &PixelBuffer<'_>,
    params: PrepParams,
) -> Result<IntensityField, PrepError> {
    Preprocessor::new(params)?.prepare(canvas)
}
