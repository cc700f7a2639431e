//! # Crate accel-sampler
//!
//! Keeps the latest readings of a phone accelerometer in a [`SampleWindow`](imu_common::SampleWindow).
//!
//! Features include:
//! - Polling of any [`ports::AccelerometerPort`] at a fixed period (100 Hz by default).
//! - A bounded window of the most recent readings (10 seconds by default), oldest evicted first.
//! - Snapshots of the window that readers can process without blocking the sampler.
//! - A deterministic mock accelerometer producing gravity, vibration and Gaussian noise.
//! - Export of a full window to a text file, one comma separated line per axis, and loading of
//!   such recordings.

pub mod adapters;
pub mod config;
pub mod export;
pub mod models;
pub mod ports;
pub mod services;

pub use config::SamplerConfig;
pub use models::errors::{Result, SamplerError};
