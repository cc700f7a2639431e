//! Feature extraction from raw accelerometer channels.
//!
//! The only feature the models use is the mean absolute amplitude (MAA) of a channel: the mean
//! of the absolute deviations from the channel mean. Removing the mean first makes the feature
//! blind to any constant offset on the axis, such as gravity.

use imu_common::{Axis, SampleWindow};

use crate::errors::{Result, WeightModelError};

/// Features of one sample window. Computed fresh for every prediction.
#[cfg_attr(
    any(feature = "serde-serialize", test),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector {
    pub maa_x: f64,
    pub maa_z: f64,
}

impl FeatureVector {
    pub fn new(maa_x: f64, maa_z: f64) -> Self {
        Self { maa_x, maa_z }
    }

    /// Extracts the features from the x and z channels of `window`.
    pub fn from_window(window: &SampleWindow) -> Result<Self> {
        extract_features(&window.channel(Axis::X), &window.channel(Axis::Z))
    }

    /// Product of both features, the interaction term.
    pub fn maa_xz(&self) -> f64 {
        self.maa_x * self.maa_z
    }
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Mean absolute deviation of `samples` from their mean.
///
/// Returns `InsufficientData` for an empty channel; `axis` only labels the error.
pub fn mean_absolute_amplitude(samples: &[f64], axis: Axis) -> Result<f64> {
    if samples.is_empty() {
        return Err(WeightModelError::InsufficientData { axis });
    }
    // Shifting by the first sample keeps a constant channel at exactly zero.
    let pivot = samples[0];
    let shifted: Vec<f64> = samples.iter().map(|s| s - pivot).collect();
    let mean = mean(&shifted);
    let total_deviation: f64 = shifted.iter().map(|s| (s - mean).abs()).sum();
    Ok(total_deviation / samples.len() as f64)
}

/// Computes the MAA of the x and z channels. Each axis is reduced independently.
pub fn extract_features(input_x: &[f64], input_z: &[f64]) -> Result<FeatureVector> {
    let maa_x = mean_absolute_amplitude(input_x, Axis::X)?;
    let maa_z = mean_absolute_amplitude(input_z, Axis::Z)?;
    Ok(FeatureVector { maa_x, maa_z })
}
