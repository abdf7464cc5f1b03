//! Downsampling to the model resolution.
//!
//! `resize_nearest` is used by the canonical blur + recenter variant on the
//! already blurred field. `resize_bilinear_rgb` serves the fallback variant,
//! which interpolates the raw canvas colours before any other processing.
use crate::image::{IntensityField, PixelBuffer};

/// Nearest-neighbour resize. Output cell `(i, j)` samples input
/// `(round(i · H / out_h), round(j · W / out_w))`, ties to even, clamped.
pub fn resize_nearest(src: &IntensityField, out_w: usize, out_h: usize) -> IntensityField {
    let mut out = IntensityField::new(out_w, out_h);
    if src.w == 0 || src.h == 0 {
        return out;
    }
    let cols: Vec<usize> = (0..out_w).map(|j| nearest_index(j, src.w, out_w)).collect();
    for i in 0..out_h {
        let src_row = src.row(nearest_index(i, src.h, out_h));
        let start = i * out_w;
        for (dst, &sx) in out.data[start..start + out_w].iter_mut().zip(&cols) {
            *dst = src_row[sx];
        }
    }
    out
}

#[inline]
fn nearest_index(dst: usize, src_len: usize, dst_len: usize) -> usize {
    let pos = (dst as f64 * src_len as f64 / dst_len as f64).round_ties_even();
    (pos as usize).min(src_len - 1)
}

/// Bilinear resize of the raw colour channels (alpha dropped).
///
/// Sample positions follow `dst · in / out` without a half-pixel offset; the
/// lower/right neighbour is clamped to the last row/column.
pub fn resize_bilinear_rgb(
    buffer: &PixelBuffer<'_>,
    out_w: usize,
    out_h: usize,
) -> Vec<[f32; 3]> {
    let mut out = Vec::with_capacity(out_w * out_h);
    if buffer.w == 0 || buffer.h == 0 {
        out.resize(out_w * out_h, [0.0; 3]);
        return out;
    }
    let scale_y = buffer.h as f32 / out_h.max(1) as f32;
    let scale_x = buffer.w as f32 / out_w.max(1) as f32;
    for i in 0..out_h {
        let (y0, y1, fy) = bilinear_taps(i, scale_y, buffer.h);
        for j in 0..out_w {
            let (x0, x1, fx) = bilinear_taps(j, scale_x, buffer.w);
            let p00 = buffer.rgb(x0, y0);
            let p01 = buffer.rgb(x1, y0);
            let p10 = buffer.rgb(x0, y1);
            let p11 = buffer.rgb(x1, y1);
            let mut px = [0.0f32; 3];
            for c in 0..3 {
                let top = p00[c] as f32 + (p01[c] as f32 - p00[c] as f32) * fx;
                let bottom = p10[c] as f32 + (p11[c] as f32 - p10[c] as f32) * fx;
                px[c] = top + (bottom - top) * fy;
            }
            out.push(px);
        }
    }
    out
}

#[inline]
fn bilinear_taps(dst: usize, scale: f32, src_len: usize) -> (usize, usize, f32) {
    let pos = dst as f32 * scale;
    let lo = (pos.floor() as usize).min(src_len - 1);
    let hi = (lo + 1).min(src_len - 1);
    (lo, hi, pos - lo as f32)
}
