use log::{debug, info};

use imu_common::SampleWindow;

use crate::errors::Result;
use crate::features::{self, FeatureVector};
use crate::models::{self, ModelKind, ModelSet, ModelSpec};
use crate::prediction::{AggregatedResult, PredictionResult};

/// The three weight models of one fitted set, validated once on construction.
///
/// Evaluation only reads the stored constants, so a `WeightModel` can be shared freely between
/// threads.
#[derive(Debug, Clone)]
pub struct WeightModel {
    set: ModelSet,
    model_one: ModelSpec,
    model_two: ModelSpec,
    model_three: ModelSpec,
}

impl WeightModel {
    /// Loads the constants of `set`.
    ///
    /// Returns `ConfigurationFault` if any fitted model is malformed. Callers should treat that
    /// as fatal, it does not depend on user input.
    pub fn new(set: ModelSet) -> Result<Self> {
        let model = Self {
            set,
            model_one: set.spec(ModelKind::ModelOne)?,
            model_two: set.spec(ModelKind::ModelTwo)?,
            model_three: set.spec(ModelKind::ModelThree)?,
        };
        debug!("Loaded {} weight models", set);
        Ok(model)
    }

    pub fn model_set(&self) -> ModelSet {
        self.set
    }

    pub fn spec(&self, kind: ModelKind) -> &ModelSpec {
        match kind {
            ModelKind::ModelOne => &self.model_one,
            ModelKind::ModelTwo => &self.model_two,
            ModelKind::ModelThree => &self.model_three,
        }
    }

    /// Evaluates one model on already extracted features.
    pub fn evaluate(&self, features: &FeatureVector, kind: ModelKind) -> Result<PredictionResult> {
        let result = models::evaluate(self.spec(kind), features)?;
        info!("{}: {}", kind, result);
        Ok(result)
    }

    /// Extracts the features of the x and z channels and evaluates model `kind`.
    pub fn predict(
        &self,
        input_x: &[f64],
        input_z: &[f64],
        kind: ModelKind,
    ) -> Result<PredictionResult> {
        let features = self.extract(input_x, input_z)?;
        self.evaluate(&features, kind)
    }

    /// Extracts the features once and evaluates all three models.
    pub fn predict_all(&self, input_x: &[f64], input_z: &[f64]) -> Result<AggregatedResult> {
        let features = self.extract(input_x, input_z)?;
        self.evaluate_all(&features)
    }

    /// Evaluates all three models on `window`.
    ///
    /// A window shared with a running sampler should be passed as a snapshot.
    pub fn predict_window(&self, window: &SampleWindow) -> Result<AggregatedResult> {
        debug!(
            "Predicting from {} of {} samples",
            window.len(),
            window.capacity()
        );
        let features = FeatureVector::from_window(window)?;
        debug!("MAA x = {:e}, MAA z = {:e}", features.maa_x, features.maa_z);
        self.evaluate_all(&features)
    }

    fn extract(&self, input_x: &[f64], input_z: &[f64]) -> Result<FeatureVector> {
        let features = features::extract_features(input_x, input_z)?;
        debug!("MAA x = {:e}, MAA z = {:e}", features.maa_x, features.maa_z);
        Ok(features)
    }

    fn evaluate_all(&self, features: &FeatureVector) -> Result<AggregatedResult> {
        Ok(AggregatedResult::new(
            self.evaluate(features, ModelKind::ModelOne)?,
            self.evaluate(features, ModelKind::ModelTwo)?,
            self.evaluate(features, ModelKind::ModelThree)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WeightModelError;
    use imu_common::{Axis, Sample3D};
    use once_cell::sync::Lazy;

    static REFINED: Lazy<WeightModel> = Lazy::new(|| WeightModel::new(ModelSet::Refined).unwrap());
    static LEGACY: Lazy<WeightModel> = Lazy::new(|| WeightModel::new(ModelSet::Legacy).unwrap());

    const REL_TOL: f64 = 1e-6;

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= REL_TOL * scale,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_result(actual: &PredictionResult, expected: [f64; 3]) {
        assert_close(actual.value, expected[0]);
        assert_close(actual.lower_bound, expected[1]);
        assert_close(actual.upper_bound, expected[2]);
    }

    #[test]
    fn test_zero_window_gives_intercept() {
        let zeros = vec![0.0; 1000];
        let refined = REFINED.predict(&zeros, &zeros, ModelKind::ModelOne).unwrap();
        assert_eq!(refined.value, 206.722278);
        let legacy = LEGACY.predict(&zeros, &zeros, ModelKind::ModelOne).unwrap();
        assert_eq!(legacy.value, 129.785961);
    }

    #[test]
    fn test_zero_window_intervals() {
        let zeros = vec![0.0; 1000];
        let refined = REFINED.predict_all(&zeros, &zeros).unwrap();
        assert_result(
            refined.get(ModelKind::ModelOne),
            [206.722278, 102.420429896, 311.024126104],
        );
        assert_result(
            refined.get(ModelKind::ModelTwo),
            [-412.6509, -995.755545085, 170.453745085],
        );
        assert_result(
            refined.get(ModelKind::ModelThree),
            [342.958346152, 131.371835709, 895.324531014],
        );
    }

    #[test]
    fn test_alternating_x_channel() {
        let input_x: Vec<f64> = (0..1000)
            .map(|i| if i % 2 == 0 { 0.5 } else { -0.5 })
            .collect();
        let input_z = vec![0.0; 1000];
        let result = REFINED
            .predict(&input_x, &input_z, ModelKind::ModelOne)
            .unwrap();
        let spec = REFINED.spec(ModelKind::ModelOne);
        let expected = spec.intercept() + spec.coefficients()[1] * 0.5;
        assert_close(result.value, expected);
        assert!(result.contains(result.value));
    }

    #[test]
    fn test_refined_reference_points() {
        let features = FeatureVector::new(0.0008, 0.0012);
        let expected = [
            [88.8057464532, -33.2150431179, 210.826536024],
            [-86.8529662016, -287.265899078, 113.559966675],
            [69.8695031028, 22.7380039135, 214.695515156],
        ];
        for (kind, expected) in ModelKind::ALL.into_iter().zip(expected) {
            assert_result(&REFINED.evaluate(&features, kind).unwrap(), expected);
        }
    }

    #[test]
    fn test_legacy_reference_points() {
        let features = FeatureVector::new(0.0005, 0.0003);
        let expected = [
            [67.7016753794, 37.7816868539, 97.6216639049],
            [-2.4453455744, -39.5937900342, 34.7030988854],
            [92.9105224573, 73.0451486833, 118.1784874],
        ];
        for (kind, expected) in ModelKind::ALL.into_iter().zip(expected) {
            assert_result(&LEGACY.evaluate(&features, kind).unwrap(), expected);
        }
    }

    #[test]
    fn test_bounds_are_ordered() {
        for model in [&*REFINED, &*LEGACY] {
            for i in 0..=20 {
                for j in 0..=20 {
                    let features = FeatureVector::new(0.0005 * i as f64, 0.0005 * j as f64);
                    for kind in ModelKind::ALL {
                        let result = model.evaluate(&features, kind).unwrap();
                        assert!(
                            result.lower_bound <= result.value
                                && result.value <= result.upper_bound,
                            "{} {} at {:?}: {:?}",
                            model.model_set(),
                            kind,
                            features,
                            result
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_models_are_independent() {
        let features = FeatureVector::new(0.001, 0.002);
        let alone = REFINED.evaluate(&features, ModelKind::ModelTwo).unwrap();
        let aggregated = REFINED.predict_all(&[0.0], &[0.0]).unwrap();
        let _ = REFINED.evaluate(&features, ModelKind::ModelOne).unwrap();
        let again = REFINED.evaluate(&features, ModelKind::ModelTwo).unwrap();
        assert_eq!(alone, again);
        assert_eq!(aggregated, REFINED.predict_all(&[0.0], &[0.0]).unwrap());
    }

    #[test]
    fn test_predict_all_matches_single_predictions() {
        let input_x = [0.01, 0.012, 0.009, 0.011];
        let input_z = [0.99, 1.0, 1.01, 1.0];
        let aggregated = REFINED.predict_all(&input_x, &input_z).unwrap();
        for kind in ModelKind::ALL {
            assert_eq!(
                *aggregated.get(kind),
                REFINED.predict(&input_x, &input_z, kind).unwrap()
            );
        }
    }

    #[test]
    fn test_predict_window() {
        let mut window = SampleWindow::new(8);
        for i in 0..8 {
            let x = if i % 2 == 0 { 0.001 } else { -0.001 };
            window.push(Sample3D::new(i as f64 * 0.01, [x, 0.0, 1.0]));
        }
        let from_window = REFINED.predict_window(&window).unwrap();
        let from_channels = REFINED
            .predict_all(&window.channel(Axis::X), &window.channel(Axis::Z))
            .unwrap();
        assert_eq!(from_window, from_channels);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            REFINED.predict(&[], &[0.0], ModelKind::ModelThree),
            Err(WeightModelError::InsufficientData { axis: Axis::X })
        );
        assert_eq!(
            REFINED.predict_all(&[0.0], &[]),
            Err(WeightModelError::InsufficientData { axis: Axis::Z })
        );
        assert!(REFINED.predict_window(&SampleWindow::default()).is_err());
    }
}
