pub mod imu;

pub use crate::traits::imu::{IMUSample, IMUUntimedSample};
