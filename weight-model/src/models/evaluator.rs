use crate::errors::Result;
use crate::features::FeatureVector;
use crate::linalg;
use crate::prediction::PredictionResult;

use super::spec::{ModelSpec, Response};

/// Evaluates `spec` at `features`.
///
/// The point estimate is the linear predictor `bᵗv`. The interval half width is
/// `t · sqrt(scale · vᵗΣv)`. Log models compute all three numbers in log space and map them
/// back with `exp`, which keeps the bounds ordered.
pub fn evaluate(spec: &ModelSpec, features: &FeatureVector) -> Result<PredictionResult> {
    let v = spec.design_vector(features);
    let variable = spec.scale() * linalg::quadratic_form(&v, spec.covariance())?;
    let prediction = linalg::dot(spec.coefficients(), &v)?;

    // Rounding in the fitted covariance can push the form marginally below zero.
    let half_width = spec.t_value() * variable.max(0.0).sqrt();
    let lower_bound = prediction - half_width;
    let upper_bound = prediction + half_width;

    let result = match spec.response() {
        Response::Linear => PredictionResult::new(prediction, lower_bound, upper_bound),
        Response::Log => {
            PredictionResult::new(prediction.exp(), lower_bound.exp(), upper_bound.exp())
        }
    };
    Ok(result)
}
