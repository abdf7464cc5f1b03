//! Normalized Gaussian convolution kernels.
//!
//! `GaussianKernel` stores both the full 2-D weight grid and the matching
//! 1-D taps. A Gaussian factorizes exactly, so `weights == taps · tapsᵀ` and
//! the blur stage may run either as one 2-D pass or as two 1-D passes.
//!
//! The kernel centre sits at `size / 2 - 0.5`, which lands between cells for
//! even sizes. Both representations are point symmetric about that centre.
use crate::error::PrepError;
use nalgebra::{DMatrix, DVector};

/// Largest accepted kernel side. The full grid holds `size²` weights.
pub const MAX_KERNEL_SIZE: usize = 255;

/// Trait implemented by separable filters usable by the blur stage.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order).
    fn taps(&self) -> &[f32];
}

#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    size: usize,
    sigma: f32,
    taps: Vec<f32>,
    weights: DMatrix<f32>,
}

impl GaussianKernel {
    /// Build a `size × size` kernel with standard deviation `sigma`.
    ///
    /// `weight(x, y) = exp(-((x - c)² + (y - c)²) / (2σ²))` with
    /// `c = size / 2 - 0.5`, divided by the sum of all weights.
    pub fn new(size: usize, sigma: f32) -> Result<Self, PrepError> {
        if size == 0 {
            return Err(PrepError::InvalidParameter(
                "kernel size must be positive".to_string(),
            ));
        }
        if size > MAX_KERNEL_SIZE {
            return Err(PrepError::InvalidParameter(format!(
                "kernel size {size} exceeds {MAX_KERNEL_SIZE}"
            )));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(PrepError::InvalidParameter(format!(
                "sigma must be positive and finite, got {sigma}"
            )));
        }

        let center = size as f64 / 2.0 - 0.5;
        let two_sigma_sq = 2.0 * (sigma as f64) * (sigma as f64);
        let profile = DVector::<f64>::from_fn(size, |i, _| {
            let d = i as f64 - center;
            (-(d * d) / two_sigma_sq).exp()
        });

        let raw = DMatrix::<f64>::from_fn(size, size, |y, x| {
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            (-(dx * dx + dy * dy) / two_sigma_sq).exp()
        });
        let total = raw.sum();
        let weights = raw.map(|v| (v / total) as f32);
        let profile_total = profile.sum();
        let taps = profile.iter().map(|&v| (v / profile_total) as f32).collect();

        Ok(Self {
            size,
            sigma,
            taps,
            weights,
        })
    }

    /// Kernel with the default spread `sigma = √size`.
    pub fn with_default_sigma(size: usize) -> Result<Self, PrepError> {
        Self::new(size, (size as f32).sqrt())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Full 2-D weights, indexed `(row, col)`.
    pub fn weights(&self) -> &DMatrix<f32> {
        &self.weights
    }

    #[inline]
    pub fn weight(&self, ky: usize, kx: usize) -> f32 {
        self.weights[(ky, kx)]
    }

    /// Zero rows/columns added before the first input sample for a
    /// same-size output. Even kernels put the extra row on the far side.
    pub fn pad_before(&self) -> usize {
        (self.size - 1) / 2
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}
