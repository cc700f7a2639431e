//! Module errors

use imu_common::Axis;
use thiserror::Error;

/// Errors produced while extracting features or evaluating a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeightModelError {
    /// A channel had no samples to extract a feature from.
    #[error("Insufficient data: no samples on axis {axis}")]
    InsufficientData { axis: Axis },

    /// Fitted model constants are inconsistent. Raised when a model is built, never per call.
    #[error("Configuration fault: {0}")]
    ConfigurationFault(String),

    /// Vector and matrix shapes disagree in a quadratic form or dot product.
    #[error("Matrix dimension mismatch: vector of length {vector} against {rows}x{cols} matrix")]
    MatrixDimensionMismatch {
        vector: usize,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, WeightModelError>;
