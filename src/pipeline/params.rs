//! Parameters configuring the normalization pipeline.
//!
//! Defaults reproduce the MNIST setup: a 280×280 canvas reduced to 28×28
//! with a 10×10 Gaussian of spread √10.
use crate::error::PrepError;
use crate::kernel::MAX_KERNEL_SIZE;
use serde::{Deserialize, Serialize};

/// Which family of pipeline to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineMode {
    /// Grayscale, blur at canvas resolution, nearest resize, recenter, clamp.
    #[default]
    BlurRecenter,
    /// Bilinear resize of the raw canvas, then grayscale and clamp.
    BilinearResize,
}

/// How the blur stage applies the kernel. Both give the same result within
/// float tolerance; the separable path is O(k) per cell instead of O(k²).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurMethod {
    #[default]
    Separable,
    Direct,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepParams {
    /// Side of the output grid.
    pub image_size: usize,
    /// Ratio between canvas side and `image_size`.
    pub canvas_scale: usize,
    /// Blur kernel side. `None` uses `canvas_scale`.
    pub kernel_size: Option<usize>,
    /// Blur spread. `None` uses `√kernel_size`.
    pub sigma: Option<f32>,
    pub mode: PipelineMode,
    pub blur_method: BlurMethod,
}

impl Default for PrepParams {
    fn default() -> Self {
        Self {
            image_size: 28,
            canvas_scale: 10,
            kernel_size: None,
            sigma: None,
            mode: PipelineMode::BlurRecenter,
            blur_method: BlurMethod::Separable,
        }
    }
}

impl PrepParams {
    pub fn with_image_size(mut self, image_size: usize) -> Self {
        self.image_size = image_size;
        self
    }

    pub fn with_canvas_scale(mut self, canvas_scale: usize) -> Self {
        self.canvas_scale = canvas_scale;
        self
    }

    pub fn with_kernel(mut self, size: usize, sigma: f32) -> Self {
        self.kernel_size = Some(size);
        self.sigma = Some(sigma);
        self
    }

    pub fn with_mode(mut self, mode: PipelineMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_blur_method(mut self, blur_method: BlurMethod) -> Self {
        self.blur_method = blur_method;
        self
    }

    /// Side of the square input canvas. Saturates for parameters that
    /// [`validate`](Self::validate) rejects.
    pub fn canvas_size(&self) -> usize {
        self.image_size.saturating_mul(self.canvas_scale)
    }

    pub fn resolved_kernel_size(&self) -> usize {
        self.kernel_size.unwrap_or(self.canvas_scale)
    }

    pub fn resolved_sigma(&self) -> f32 {
        self.sigma
            .unwrap_or_else(|| (self.resolved_kernel_size() as f32).sqrt())
    }

    /// Reject resolutions that cannot form a canvas and kernels larger than
    /// [`MAX_KERNEL_SIZE`]. Sigma is checked by the kernel generator itself.
    pub fn validate(&self) -> Result<(), PrepError> {
        if self.image_size == 0 {
            return Err(PrepError::InvalidParameter(
                "image_size must be positive".to_string(),
            ));
        }
        if self.canvas_scale == 0 {
            return Err(PrepError::InvalidParameter(
                "canvas_scale must be positive".to_string(),
            ));
        }
        let side = self.image_size.checked_mul(self.canvas_scale);
        if side.and_then(|s| s.checked_mul(s)).is_none() {
            return Err(PrepError::InvalidParameter(format!(
                "canvas {}x{} overflows the addressable size",
                self.image_size, self.canvas_scale
            )));
        }
        let kernel_size = self.resolved_kernel_size();
        if kernel_size > MAX_KERNEL_SIZE {
            return Err(PrepError::InvalidParameter(format!(
                "kernel size {kernel_size} exceeds {MAX_KERNEL_SIZE}"
            )));
        }
        Ok(())
    }
}
