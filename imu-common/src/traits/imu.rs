use crate::types::Axis;

/// Untimed sample from an IMU (Inertial Measurement Unit).
pub trait IMUUntimedSample: Send + Sync + Clone + Default + 'static {
    /// Returns the component of the measurement along `axis`.
    fn get_axis(&self, axis: Axis) -> f64;
}

/// Timed sample from an IMU (Inertial Measurement Unit).
pub trait IMUSample: Send + Sync + Clone + Default + 'static {
    type Untimed: IMUUntimedSample;

    ///  Returns the measurement without its timestamp.
    fn get_measurement(&self) -> Self::Untimed;
    ///  Returns the timestamp of the sample in seconds.
    fn get_timestamp_secs(&self) -> f64;
    /// Builds a sample from a timestamp and an untimed measurement.
    fn from_measurement(timestamp: f64, measurement: Self::Untimed) -> Self;
}
