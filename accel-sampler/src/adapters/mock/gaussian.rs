use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::models::errors::SamplerError;

/// Functionality to add some Gaussian noise.
#[derive(Clone, Debug)]
pub(super) struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    /// Creates new distribution from mean and stdev
    pub(super) fn new(mean: f64, stdev: f64) -> Result<Self, SamplerError> {
        if stdev.is_nan() || stdev < 0.0 {
            return Err(SamplerError::InvalidConfig(format!(
                "noise standard deviation {}",
                stdev
            )));
        }
        let normal = Normal::new(mean, stdev)
            .map_err(|e| SamplerError::InvalidConfig(format!("noise: {}", e)))?;
        Ok(Self { normal })
    }

    /// Sample from distribution
    pub(super) fn draw_sample(&self, rng: &mut StdRng) -> f64 {
        self.normal.sample(rng)
    }

    /// Adds independent noise to each coordinate
    pub(super) fn add_noise(&self, rng: &mut StdRng, data: [f64; 3]) -> [f64; 3] {
        data.map(|d| d + self.draw_sample(rng))
    }
}
