//! Same-size Gaussian blur with zero padding.
//!
//! `gaussian_blur` runs the kernel as two 1-D passes (rows, then columns);
//! `convolve2d` applies the full 2-D weight grid directly and serves as the
//! reference. Samples outside the field contribute zero, so mass is only lost
//! where the kernel footprint crosses the border.
//!
//! For a kernel of size `k` the footprint of output cell `x` spans input
//! cells `x - pad .. x - pad + k` with `pad = (k - 1) / 2`.
use crate::image::IntensityField;
use crate::kernel::{GaussianKernel, SeparableFilter};
use rayon::prelude::*;

/// Separable blur: horizontal pass into a scratch field, then vertical pass.
/// A filter without taps leaves the field unchanged.
pub fn gaussian_blur<F: SeparableFilter + ?Sized>(
    src: &IntensityField,
    filter: &F,
) -> IntensityField {
    let (w, h) = (src.w, src.h);
    let taps = filter.taps();
    if taps.is_empty() {
        return src.clone();
    }
    let mut out = IntensityField::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let pad = (taps.len() - 1) / 2;

    let mut horiz = IntensityField::new(w, h);
    horiz
        .data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst_row)| filter_row(src.row(y), dst_row, taps, pad));

    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for (k, &tap) in taps.iter().enumerate() {
                let Some(sy) = source_index(y, k, pad, h) else {
                    continue;
                };
                for (dst, &v) in dst_row.iter_mut().zip(horiz.row(sy)) {
                    *dst += tap * v;
                }
            }
        });
    out
}

/// Direct 2-D cross-correlation with the full kernel grid.
pub fn convolve2d(src: &IntensityField, kernel: &GaussianKernel) -> IntensityField {
    let (w, h) = (src.w, src.h);
    let mut out = IntensityField::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let size = kernel.size();
    let pad = kernel.pad_before();

    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for (x, dst) in dst_row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for ky in 0..size {
                    let Some(sy) = source_index(y, ky, pad, h) else {
                        continue;
                    };
                    let src_row = src.row(sy);
                    for kx in 0..size {
                        if let Some(sx) = source_index(x, kx, pad, w) {
                            acc += kernel.weight(ky, kx) * src_row[sx];
                        }
                    }
                }
                *dst = acc;
            }
        });
    out
}

fn filter_row(row: &[f32], out: &mut [f32], taps: &[f32], pad: usize) {
    let len = row.len();
    for (x, dst) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            if let Some(sx) = source_index(x, k, pad, len) {
                acc += tap * row[sx];
            }
        }
        *dst = acc;
    }
}

/// Input index touched by kernel tap `k` for output `pos`, or `None` in the
/// zero-padded border.
#[inline]
fn source_index(pos: usize, k: usize, pad: usize, len: usize) -> Option<usize> {
    (pos + k).checked_sub(pad).filter(|&i| i < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(w: usize, h: usize) -> IntensityField {
        IntensityField::from_fn(w, h, |x, y| (((x * 7 + y * 13) % 11) as f32) / 10.0)
    }

    #[test]
    fn separable_matches_direct() {
        let field = pattern(37, 29);
        for (size, sigma) in [(10usize, 10f32.sqrt()), (5, 1.0), (4, 2.5)] {
            let k = GaussianKernel::new(size, sigma).unwrap();
            let a = gaussian_blur(&field, &k);
            let b = convolve2d(&field, &k);
            for (i, (&va, &vb)) in a.data.iter().zip(&b.data).enumerate() {
                assert!(
                    (va - vb).abs() < 1e-5,
                    "mismatch at {i} for kernel {size}: {va} vs {vb}"
                );
            }
        }
    }

    #[test]
    fn interior_mass_is_conserved() {
        let mut field = IntensityField::new(40, 40);
        for y in 18..21 {
            for x in 18..21 {
                field.set(x, y, 1.0);
            }
        }
        let k = GaussianKernel::with_default_sigma(10).unwrap();
        let before = field.total_mass();
        let after = gaussian_blur(&field, &k).total_mass();
        assert!(
            (before - after).abs() < 1e-4,
            "mass changed from {before} to {after}"
        );
    }

    #[test]
    fn border_mass_is_truncated() {
        let mut field = IntensityField::new(20, 20);
        field.set(0, 0, 1.0);
        let k = GaussianKernel::with_default_sigma(10).unwrap();
        let after = gaussian_blur(&field, &k).total_mass();
        assert!(after < 0.5, "corner impulse should lose mass, kept {after}");
    }

    #[test]
    fn impulse_response_reproduces_kernel() {
        let mut field = IntensityField::new(15, 15);
        field.set(7, 7, 1.0);
        let k = GaussianKernel::new(5, 1.3).unwrap();
        let out = convolve2d(&field, &k);
        // out(x) = sum_k in(x + k - pad) w(k) => impulse at 7 shows w(k) at x = 7 + pad - k
        for ky in 0..5 {
            for kx in 0..5 {
                let (x, y) = (7 + 2 - kx, 7 + 2 - ky);
                assert!((out.get(x, y) - k.weight(ky, kx)).abs() < 1e-7);
            }
        }
    }

    #[test]
    fn even_kernel_extends_one_cell_further_toward_origin() {
        // k = 10, pad = 4: an impulse at 10 spreads over 5..=14 on each axis.
        let mut field = IntensityField::new(30, 30);
        field.set(10, 10, 1.0);
        let k = GaussianKernel::with_default_sigma(10).unwrap();
        assert_eq!(k.pad_before(), 4);
        for out in [gaussian_blur(&field, &k), convolve2d(&field, &k)] {
            for y in 0..30 {
                for x in 0..30 {
                    let inside = (5..=14).contains(&x) && (5..=14).contains(&y);
                    let v = out.get(x, y);
                    if inside {
                        let expected = k.weight(14 - y, 14 - x);
                        assert!((v - expected).abs() < 1e-6, "({x},{y}): {v} vs {expected}");
                    } else {
                        assert_eq!(v, 0.0, "({x},{y}) outside the footprint");
                    }
                }
            }
            // Peak block sits on cells 9 and 10, straddling the impulse.
            assert_eq!(out.max_value(), out.get(9, 9).max(out.get(10, 10)));
        }
    }

    struct NoTaps;

    impl SeparableFilter for NoTaps {
        fn taps(&self) -> &[f32] {
            &[]
        }
    }

    #[test]
    fn filter_without_taps_is_identity() {
        let field = pattern(6, 4);
        assert_eq!(gaussian_blur(&field, &NoTaps), field);
    }

    #[test]
    fn empty_field_passes_through() {
        let k = GaussianKernel::new(3, 1.0).unwrap();
        let out = gaussian_blur(&IntensityField::new(0, 4), &k);
        assert_eq!((out.w, out.h), (0, 4));
    }
}
