use crate::traits::IMUSample;
use crate::types::untimed::{xyz::N_XYZ_COORDINATES, XYZ};

#[cfg(any(feature = "serde-serialize", test))]
use serde::{Deserialize, Serialize};

const TIMESTAMP_IDX: usize = 0;
const X_COORD_IDX: usize = 1;

/// A structure representing a 3D sample with a timestamp and measurement.
///
/// # Examples
///
/// ```
/// use imu_common::types::timed::Sample3D;
/// use imu_common::types::untimed::XYZ;
/// use imu_common::traits::IMUSample;
///
/// let timestamp = 0.01;
/// let measurement = [0.01, -0.02, 0.98];
/// let sample = Sample3D::new(timestamp, measurement);
///
/// assert_eq!(sample.get_timestamp_secs(), timestamp);
/// assert_eq!(sample.get_measurement(), XYZ::from(measurement));
/// ```
#[cfg_attr(any(feature = "serde-serialize", test), derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct Sample3D {
    timestamp: f64,
    measurement: XYZ,
}

impl Sample3D {
    ///  Creates a new `Sample3D` instance from a timestamp and a measurement array.
    pub fn new(timestamp: f64, measurement: [f64; N_XYZ_COORDINATES]) -> Self {
        Self {
            timestamp,
            measurement: XYZ::new(measurement),
        }
    }
}

impl IMUSample for Sample3D {
    type Untimed = XYZ;

    fn get_measurement(&self) -> Self::Untimed {
        self.measurement.clone()
    }

    fn get_timestamp_secs(&self) -> f64 {
        self.timestamp
    }

    fn from_measurement(timestamp: f64, measurement: Self::Untimed) -> Self {
        Self {
            timestamp,
            measurement,
        }
    }
}

/// Builds a sample from `[timestamp, x, y, z]`.
impl TryFrom<Vec<f64>> for Sample3D {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.len() != N_XYZ_COORDINATES + 1 {
            return Err("Invalid length of input vector");
        }
        let measurement = XYZ::try_from(value[X_COORD_IDX..=N_XYZ_COORDINATES].to_vec())?;
        Ok(Sample3D::from_measurement(
            value[TIMESTAMP_IDX],
            measurement,
        ))
    }
}
