use std::time::Duration;

use imu_common::WINDOW_CAPACITY;

use crate::models::errors::SamplerError;

/// 100 Hz.
pub const DEFAULT_SAMPLE_PERIOD_MILLIS: u64 = 10;

/// Acquisition settings of a [`SamplerService`](crate::services::SamplerService).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub sample_period_millis: u64,
    pub window_capacity: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_period_millis: DEFAULT_SAMPLE_PERIOD_MILLIS,
            window_capacity: WINDOW_CAPACITY,
        }
    }
}

impl SamplerConfig {
    pub fn new(sample_period_millis: u64, window_capacity: usize) -> Self {
        Self {
            sample_period_millis,
            window_capacity,
        }
    }

    pub fn validate(&self) -> Result<(), SamplerError> {
        if self.sample_period_millis == 0 {
            return Err(SamplerError::InvalidConfig(
                "sample period must be positive".to_string(),
            ));
        }
        if self.window_capacity == 0 {
            return Err(SamplerError::InvalidConfig(
                "window capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn sample_period(&self) -> Duration {
        Duration::from_millis(self.sample_period_millis)
    }

    pub fn sample_rate_hz(&self) -> f64 {
        1000.0 / self.sample_period_millis as f64
    }

    /// Time span covered by a full window.
    pub fn window_seconds(&self) -> f64 {
        self.window_capacity as f64 * self.sample_period_millis as f64 / 1000.0
    }
}
