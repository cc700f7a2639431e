//! Small dense linear algebra for the prediction interval.
//!
//! Shapes are tiny (3 or 4), so both operations are direct `nalgebra` expressions guarded by an
//! explicit dimension check.

use nalgebra::{DMatrix, DVector};

use crate::errors::{Result, WeightModelError};

/// Dot product of two vectors of equal length.
pub fn dot(a: &DVector<f64>, b: &DVector<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(WeightModelError::MatrixDimensionMismatch {
            vector: a.len(),
            rows: b.len(),
            cols: 1,
        });
    }
    Ok(a.dot(b))
}

/// Quadratic form `vᵗ · Σ · v` for a square `sigma` whose dimension matches `v`.
pub fn quadratic_form(v: &DVector<f64>, sigma: &DMatrix<f64>) -> Result<f64> {
    if !sigma.is_square() || sigma.nrows() != v.len() {
        return Err(WeightModelError::MatrixDimensionMismatch {
            vector: v.len(),
            rows: sigma.nrows(),
            cols: sigma.ncols(),
        });
    }
    Ok(v.dot(&(sigma * v)))
}
