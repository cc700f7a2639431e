pub mod axis;
pub mod buffers;
pub mod timed;
pub mod untimed;

pub use crate::types::axis::Axis;
