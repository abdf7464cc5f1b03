//! Intensity-weighted centroid (first-order image moments).
use crate::error::PrepError;
use crate::image::IntensityField;
use serde::{Deserialize, Serialize};

/// Sub-cell position in field coordinates (`row` down, `col` right).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub row: f32,
    pub col: f32,
}

impl Centroid {
    pub fn new(row: f32, col: f32) -> Self {
        Self { row, col }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Centroid) -> f32 {
        (self.row - other.row).hypot(self.col - other.col)
    }
}

/// Center of mass `(Σ i·f / M, Σ j·f / M)` of a field.
///
/// Returns [`PrepError::ZeroMass`] when the total mass `M` is not positive;
/// the division is never attempted in that case.
pub fn center_of_mass(field: &IntensityField) -> Result<Centroid, PrepError> {
    let mut m00 = 0.0f64;
    let mut m_row = 0.0f64;
    let mut m_col = 0.0f64;
    for (i, row) in field.rows().enumerate() {
        let mut row_mass = 0.0f64;
        for (j, &v) in row.iter().enumerate() {
            let v = v as f64;
            row_mass += v;
            m_col += j as f64 * v;
        }
        m00 += row_mass;
        m_row += i as f64 * row_mass;
    }
    if !(m00 > 0.0 && m00.is_finite()) {
        return Err(PrepError::ZeroMass);
    }
    Ok(Centroid::new((m_row / m00) as f32, (m_col / m00) as f32))
}
