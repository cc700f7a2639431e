//! Acquisition and model constants.

/// Nominal accelerometer sample rate the models were fitted on.
pub use imu_common::SAMPLE_RATE_HZ;
pub use imu_common::WINDOW_CAPACITY;

/// Length of the window the features are extracted from.
pub const WINDOW_SECONDS: f64 = 10.0;
/// Confidence level of the reported intervals.
pub const CONFIDENCE_LEVEL: f64 = 0.95;
/// Environment variable selecting the fitted model set (`refined` or `legacy`).
pub const MODEL_SET_ENV: &str = "WEIGHT_MODEL_SET";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_covers_window_seconds() {
        assert_eq!(WINDOW_CAPACITY as f64 / SAMPLE_RATE_HZ, WINDOW_SECONDS);
    }
}
