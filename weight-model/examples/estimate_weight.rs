//! Samples a mock accelerometer for one window and prints the three weight estimates.
//!
//! ```text
//! RUST_LOG=info WEIGHT_MODEL_SET=legacy cargo run -p weight_model --example estimate_weight
//! ```

use log::{error, info};
use std::error::Error;

use accel_sampler::adapters::mock::MockConfig;
use accel_sampler::services;
use accel_sampler::SamplerConfig;
use weight_model::constants::{MODEL_SET_ENV, WINDOW_SECONDS};
use weight_model::{ModelSet, WeightModel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let model_set = match std::env::var(MODEL_SET_ENV) {
        Ok(value) => value.parse::<ModelSet>()?,
        Err(_) => ModelSet::default(),
    };
    let model = WeightModel::new(model_set)?;

    let config = SamplerConfig::default();
    // Margin so the window is full when the sampler stops
    let run_for_millis = (WINDOW_SECONDS * 1000.0) as u64 + 500;
    info!(
        "Sampling for {} ms with the {} models",
        run_for_millis, model_set
    );
    let (handle, sampler) =
        services::run_mock_service("Phone", MockConfig::default(), config, run_for_millis)?;
    handle.await?;

    let window = sampler.snapshot().await;
    if !window.is_full() {
        error!(
            "Only {} of {} samples collected",
            window.len(),
            window.capacity()
        );
    }
    let estimates = model.predict_window(&window)?;
    println!("{}", estimates);
    Ok(())
}
