use std::fmt;

use crate::constants::CONFIDENCE_LEVEL;
use crate::models::ModelKind;

/// Weight estimate in grams with its 95% confidence interval.
#[cfg_attr(
    any(feature = "serde-serialize", test),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub value: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl PredictionResult {
    pub fn new(value: f64, lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            value,
            lower_bound,
            upper_bound,
        }
    }

    /// True if `weight` lies inside the interval, bounds included.
    pub fn contains(&self, weight: f64) -> bool {
        self.lower_bound <= weight && weight <= self.upper_bound
    }

    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Estimated weight: {:.3}g, {:.0}% CI [{:.3}g, {:.3}g]",
            self.value,
            CONFIDENCE_LEVEL * 100.0,
            self.lower_bound,
            self.upper_bound
        )
    }
}

/// One prediction per model for the same measurement.
#[cfg_attr(
    any(feature = "serde-serialize", test),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedResult {
    model_one: PredictionResult,
    model_two: PredictionResult,
    model_three: PredictionResult,
}

impl AggregatedResult {
    pub fn new(
        model_one: PredictionResult,
        model_two: PredictionResult,
        model_three: PredictionResult,
    ) -> Self {
        Self {
            model_one,
            model_two,
            model_three,
        }
    }

    pub fn get(&self, kind: ModelKind) -> &PredictionResult {
        match kind {
            ModelKind::ModelOne => &self.model_one,
            ModelKind::ModelTwo => &self.model_two,
            ModelKind::ModelThree => &self.model_three,
        }
    }

    /// Results in model order.
    pub fn iter(&self) -> impl Iterator<Item = (ModelKind, &PredictionResult)> {
        ModelKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl fmt::Display for AggregatedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, result) in self.iter() {
            writeln!(f, "{}: {}", kind, result)?;
        }
        Ok(())
    }
}
