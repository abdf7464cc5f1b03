//! Pipeline stages, leaves first.
//!
//! Each stage borrows its input and allocates its own output, so the caller
//! decides when an intermediate is released.
pub mod blur;
pub mod clamp;
pub mod grayscale;
pub mod moments;
pub mod recenter;
pub mod resize;

pub use blur::{convolve2d, gaussian_blur};
pub use clamp::clamp_unit;
pub use grayscale::{ink_intensity, to_intensity};
pub use moments::{center_of_mass, Centroid};
pub use recenter::{field_center, shift_field, Translation};
pub use resize::{resize_bilinear_rgb, resize_nearest};
