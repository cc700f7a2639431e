use async_trait::async_trait;

use imu_common::XYZ;

use crate::models::errors::SamplerError;

/// Source of accelerometer readings in g.
#[async_trait]
pub trait AccelerometerPort: Send + Sync {
    /// Returns the latest reading. Returns FetchData error if the sensor can't be read.
    async fn read(&self) -> Result<XYZ, SamplerError>;

    fn get_tag(&self) -> &str;
}
