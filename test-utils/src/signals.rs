use std::f64::consts::PI;

use imu_common::{Sample3D, SampleWindow, SAMPLE_RATE_HZ};

/// Resting reading of a sensor lying flat, in g.
pub const GRAVITY: [f64; 3] = [0.0, 0.0, -1.0];

fn timestamp(idx: usize) -> f64 {
    idx as f64 / SAMPLE_RATE_HZ
}

/// Full window built from three channels of equal length.
///
/// # Panics
///
/// Panics if the channels have different lengths.
pub fn window_from_channels(x: &[f64], y: &[f64], z: &[f64]) -> SampleWindow {
    assert!(
        x.len() == y.len() && y.len() == z.len(),
        "channels must have the same length"
    );
    let mut window = SampleWindow::new(x.len());
    for idx in 0..x.len() {
        window.push(Sample3D::new(timestamp(idx), [x[idx], y[idx], z[idx]]));
    }
    window
}

/// Full window of `n` identical readings.
pub fn constant_window(n: usize, reading: [f64; 3]) -> SampleWindow {
    let mut window = SampleWindow::new(n);
    for idx in 0..n {
        window.push(Sample3D::new(timestamp(idx), reading));
    }
    window
}

/// Full window whose readings alternate between `offset + amplitude` and `offset - amplitude`.
///
/// The mean absolute amplitude of each channel is exactly `amplitude` when `n` is even.
pub fn alternating_window(n: usize, offset: [f64; 3], amplitude: [f64; 3]) -> SampleWindow {
    let mut window = SampleWindow::new(n);
    for idx in 0..n {
        let sign = if idx % 2 == 0 { 1.0 } else { -1.0 };
        let reading: [f64; 3] = std::array::from_fn(|i| offset[i] + sign * amplitude[i]);
        window.push(Sample3D::new(timestamp(idx), reading));
    }
    window
}

/// Full window of a sensor at rest vibrating at `frequency_hz` with per axis `amplitude`.
pub fn vibration_window(n: usize, frequency_hz: f64, amplitude: [f64; 3]) -> SampleWindow {
    let mut window = SampleWindow::new(n);
    for idx in 0..n {
        let t = timestamp(idx);
        let phase = (2.0 * PI * frequency_hz * t).sin();
        let reading: [f64; 3] = std::array::from_fn(|i| GRAVITY[i] + amplitude[i] * phase);
        window.push(Sample3D::new(t, reading));
    }
    window
}
