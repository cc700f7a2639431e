//! Synthetic accelerometer windows shared by the workspace tests.

pub mod signals;
