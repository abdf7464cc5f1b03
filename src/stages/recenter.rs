//! Integer translation that moves the centroid onto the field centre.
//!
//! The displacement is rounded half-to-even, so a centroid exactly half a
//! cell away from the centre moves toward the even offset (`0.5 -> 0`,
//! `1.5 -> 2`, `-2.5 -> -2`). Cells shifted past an edge are discarded and
//! the opposite edge is filled with zeros; the field size never changes.
use super::moments::Centroid;
use crate::image::IntensityField;
use serde::{Deserialize, Serialize};

/// Signed whole-cell displacement applied by [`shift_field`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub d_row: i32,
    pub d_col: i32,
}

impl Translation {
    pub fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// `round(target - centroid)` per axis, ties to even.
    pub fn toward(target: Centroid, centroid: Centroid) -> Self {
        Self {
            d_row: (target.row - centroid.row).round_ties_even() as i32,
            d_col: (target.col - centroid.col).round_ties_even() as i32,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.d_row == 0 && self.d_col == 0
    }
}

/// Geometric centre used as the recentering target: `(h / 2, w / 2)`.
pub fn field_center(field: &IntensityField) -> Centroid {
    Centroid::new(field.h as f32 / 2.0, field.w as f32 / 2.0)
}

/// Translate a field by `t`: cell `(r, c)` moves to `(r + d_row, c + d_col)`.
pub fn shift_field(src: &IntensityField, t: Translation) -> IntensityField {
    let mut out = IntensityField::new(src.w, src.h);
    let (dr, dc) = (t.d_row as i64, t.d_col as i64);
    let (w, h) = (src.w as i64, src.h as i64);
    if dr.abs() >= h || dc.abs() >= w {
        return out;
    }
    // Destination columns that receive a source cell.
    let dst_x0 = dc.max(0) as usize;
    let dst_x1 = (w + dc.min(0)) as usize;
    let src_x0 = (-dc).max(0) as usize;
    let span = dst_x1 - dst_x0;
    for y in 0..h {
        let sy = y - dr;
        if !(0..h).contains(&sy) {
            continue;
        }
        let src_row = &src.row(sy as usize)[src_x0..src_x0 + span];
        let start = y as usize * src.w + dst_x0;
        out.data[start..start + span].copy_from_slice(src_row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_rounds_half_to_even() {
        let target = Centroid::new(14.0, 14.0);
        assert_eq!(
            Translation::toward(target, Centroid::new(13.5, 12.5)),
            Translation::new(0, 2)
        );
        assert_eq!(
            Translation::toward(target, Centroid::new(16.5, 15.5)),
            Translation::new(-2, -2)
        );
        assert_eq!(
            Translation::toward(target, Centroid::new(5.4, 20.6)),
            Translation::new(9, -7)
        );
    }

    #[test]
    fn shift_moves_content_and_zero_fills() {
        let src = IntensityField::from_fn(4, 3, |x, y| (y * 4 + x + 1) as f32);
        let out = shift_field(&src, Translation::new(1, -1));
        #[rustfmt::skip]
        let expected = vec![
            0.0, 0.0, 0.0, 0.0,
            2.0, 3.0, 4.0, 0.0,
            6.0, 7.0, 8.0, 0.0,
        ];
        assert_eq!(out.data, expected);
    }

    #[test]
    fn shift_does_not_wrap() {
        let mut src = IntensityField::new(5, 5);
        src.set(4, 4, 1.0);
        let out = shift_field(&src, Translation::new(1, 1));
        assert_eq!(out.total_mass(), 0.0);
        let out = shift_field(&src, Translation::new(-4, -4));
        assert_eq!(out.get(0, 0), 1.0);
        let out = shift_field(&src, Translation::new(-9, 0));
        assert_eq!(out.total_mass(), 0.0);
    }

    #[test]
    fn identity_shift_is_a_copy() {
        let src = IntensityField::from_fn(6, 6, |x, y| (x + y) as f32);
        assert!(Translation::default().is_identity());
        assert_eq!(shift_field(&src, Translation::default()), src);
    }

    #[test]
    fn center_of_even_field() {
        let field = IntensityField::new(28, 28);
        assert_eq!(field_center(&field), Centroid::new(14.0, 14.0));
    }
}
