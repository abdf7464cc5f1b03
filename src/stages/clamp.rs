//! Final range guard.
use crate::image::IntensityField;

/// Clip every cell into `[0, 1]`, mapping NaN to 0. Reuses the buffer.
pub fn clamp_unit(mut field: IntensityField) -> IntensityField {
    for v in &mut field.data {
        *v = if v.is_nan() { 0.0 } else { (*v).clamp(0.0, 1.0) };
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clips_overshoot_and_nan() {
        let field =
            IntensityField::from_vec(5, 1, vec![-1e-3, 0.25, 1.0000002, f32::NAN, f32::INFINITY])
                .unwrap();
        assert_eq!(clamp_unit(field).data, vec![0.0, 0.25, 1.0, 0.0, 1.0]);
    }
}
