//! # Crate weight-model
//!
//! Estimates the weight of an object resting on a phone from the vibration recorded by the
//! phone's accelerometer.
//!
//! The estimation runs in two steps:
//! - [`features`]: the mean absolute amplitude of the x and z channels of a sample window.
//! - [`models`]: three regression models fitted offline turn those two features into a point
//!   estimate in grams with a 95% confidence interval.
//!
//! [`WeightModel`] bundles both steps for one fitted model set.
//!
//! ```
//! use weight_model::{ModelKind, ModelSet, WeightModel};
//!
//! let model = WeightModel::new(ModelSet::Refined).unwrap();
//! let input_x = vec![0.0; 1000];
//! let input_z = vec![0.0; 1000];
//!
//! let result = model.predict(&input_x, &input_z, ModelKind::ModelOne).unwrap();
//! assert_eq!(result.value, 206.722278);
//! assert!(result.lower_bound <= result.value && result.value <= result.upper_bound);
//! ```

pub mod constants;
pub mod errors;
pub mod features;
pub mod linalg;
pub mod models;
pub mod prediction;
pub mod predictor;

pub use errors::{Result, WeightModelError};
pub use features::FeatureVector;
pub use models::{ModelKind, ModelSet, ModelSpec};
pub use prediction::{AggregatedResult, PredictionResult};
pub use predictor::WeightModel;
