//! Grayscale conversion with polarity inversion.
//!
//! Drawn ink is dark on a light background; the model expects ink as high
//! intensity. Each pixel's colour channels are averaged (alpha ignored),
//! inverted and scaled into `[0, 1]`.
use crate::image::{IntensityField, PixelBuffer};

/// Ink intensity of one pixel given its colour channels on a 0..=255 scale.
#[inline]
pub fn ink_intensity(rgb: [f32; 3]) -> f32 {
    let luminance = (rgb[0] + rgb[1] + rgb[2]) / 3.0;
    (255.0 - luminance) / 255.0
}

/// Convert a multi-channel canvas into a full-resolution intensity field.
pub fn to_intensity(buffer: &PixelBuffer<'_>) -> IntensityField {
    let mut out = IntensityField::new(buffer.w, buffer.h);
    for (y, src) in buffer.rows().enumerate() {
        let dst = out.row_mut(y);
        for (px, v) in src.chunks_exact(buffer.channels).zip(dst.iter_mut()) {
            *v = ink_intensity([px[0] as f32, px[1] as f32, px[2] as f32]);
        }
    }
    out
}

/// Convert interleaved floating-point RGB samples (as produced by the
/// bilinear resize) into an intensity field.
pub fn rgb_to_intensity(w: usize, h: usize, samples: &[[f32; 3]]) -> IntensityField {
    IntensityField::from_fn(w, h, |x, y| ink_intensity(samples[y * w + x]))
}
