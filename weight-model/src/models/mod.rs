//! The three weight regression models.
//!
//! | Model   | Design vector                    | Response   |
//! |---------|----------------------------------|------------|
//! | Model 1 | `[1, maa_x, maa_z]`              | grams      |
//! | Model 2 | `[1, maa_x, maa_z, maa_x·maa_z]` | grams      |
//! | Model 3 | `[1, maa_x, maa_z]`              | log(grams) |

pub mod evaluator;
pub(crate) mod fits;
pub mod spec;

use std::fmt;
use std::str::FromStr;

pub use evaluator::evaluate;
pub use spec::{ModelSpec, Response, Term};

use crate::errors::Result;

/// Selects one of the three models.
#[cfg_attr(
    any(feature = "serde-serialize", test),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    ModelOne,
    ModelTwo,
    ModelThree,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::ModelOne, ModelKind::ModelTwo, ModelKind::ModelThree];
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::ModelOne => write!(f, "Model 1"),
            ModelKind::ModelTwo => write!(f, "Model 2"),
            ModelKind::ModelThree => write!(f, "Model 3"),
        }
    }
}

/// Which offline fit the model constants come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSet {
    /// Later fit, covariance already scaled. Authoritative.
    #[default]
    Refined,
    /// Earlier fit, covariance scaled by a separate residual mean squared error.
    Legacy,
}

impl ModelSet {
    /// Builds the validated constants of `kind` for this fit.
    pub fn spec(&self, kind: ModelKind) -> Result<ModelSpec> {
        match (self, kind) {
            (ModelSet::Refined, ModelKind::ModelOne) => fits::refined::model_one(),
            (ModelSet::Refined, ModelKind::ModelTwo) => fits::refined::model_two(),
            (ModelSet::Refined, ModelKind::ModelThree) => fits::refined::model_three(),
            (ModelSet::Legacy, ModelKind::ModelOne) => fits::legacy::model_one(),
            (ModelSet::Legacy, ModelKind::ModelTwo) => fits::legacy::model_two(),
            (ModelSet::Legacy, ModelKind::ModelThree) => fits::legacy::model_three(),
        }
    }
}

impl FromStr for ModelSet {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "refined" => Ok(ModelSet::Refined),
            "legacy" => Ok(ModelSet::Legacy),
            other => Err(format!("Unknown model set: {}", other)),
        }
    }
}

impl fmt::Display for ModelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSet::Refined => write!(f, "refined"),
            ModelSet::Legacy => write!(f, "legacy"),
        }
    }
}
