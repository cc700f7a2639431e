// Emulates the accelerometer of a phone lying on a vibrating surface

mod gaussian;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;
use tokio::sync::Mutex;

use imu_common::XYZ;

use crate::models::errors::SamplerError;
use crate::ports::AccelerometerPort;
use gaussian::GaussianNoise;

/// Settings of the synthetic signal.
#[derive(Debug, Clone, PartialEq)]
pub struct MockConfig {
    /// Time between two readings, used to advance the vibration phase.
    pub sample_period_millis: f64,
    /// Constant offset in g. The phone lies flat by default.
    pub gravity: [f64; 3],
    /// Vibration frequency, 10 Hz like the haptic pulse driving the measurement.
    pub vibration_hz: f64,
    /// Peak vibration amplitude per axis in g.
    pub amplitude: [f64; 3],
    /// Standard deviation of the sensor noise in g. `None` disables noise.
    pub noise_stdev: Option<f64>,
    pub seed: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            sample_period_millis: 10.0,
            gravity: [0.0, 0.0, -1.0],
            vibration_hz: 10.0,
            amplitude: [0.0012, 0.0008, 0.0018],
            noise_stdev: Some(0.0002),
            seed: 42,
        }
    }
}

struct MockState {
    tick: u64,
    rng: StdRng,
}

/// Deterministic accelerometer: gravity plus a sinusoidal vibration plus optional noise.
pub struct AccelerometerMock {
    tag: String,
    config: MockConfig,
    noise: Option<GaussianNoise>,
    state: Mutex<MockState>,
}

impl AccelerometerMock {
    /// Returns InvalidConfig if the period is not positive or the noise deviation is invalid.
    pub fn new(tag: &str, config: MockConfig) -> Result<Self, SamplerError> {
        if config.sample_period_millis.is_nan() || config.sample_period_millis <= 0.0 {
            return Err(SamplerError::InvalidConfig(format!(
                "sample period {} ms",
                config.sample_period_millis
            )));
        }
        let noise = config
            .noise_stdev
            .map(|stdev| GaussianNoise::new(0.0, stdev))
            .transpose()?;
        let state = Mutex::new(MockState {
            tick: 0,
            rng: StdRng::seed_from_u64(config.seed),
        });
        Ok(Self {
            tag: tag.to_string(),
            config,
            noise,
            state,
        })
    }

    /// Noise free reading at time `t` seconds.
    pub fn signal_at(&self, t: f64) -> [f64; 3] {
        let phase = (2.0 * PI * self.config.vibration_hz * t).sin();
        let mut value = self.config.gravity;
        for (v, a) in value.iter_mut().zip(self.config.amplitude) {
            *v += a * phase;
        }
        value
    }
}

#[async_trait]
impl AccelerometerPort for AccelerometerMock {
    async fn read(&self) -> Result<XYZ, SamplerError> {
        let mut state = self.state.lock().await;
        let t = state.tick as f64 * self.config.sample_period_millis / 1000.0;
        state.tick += 1;
        let mut value = self.signal_at(t);
        if let Some(noise) = &self.noise {
            value = noise.add_noise(&mut state.rng, value);
        }
        Ok(XYZ::new(value))
    }

    fn get_tag(&self) -> &str {
        &self.tag
    }
}
