//! Shared sensor types for the accelerometer workspace.
//!
//! - [`types::Axis`] names the three accelerometer axes.
//! - [`types::untimed::XYZ`] is a raw tri-axial reading in g.
//! - [`types::timed::Sample3D`] stamps a reading with its acquisition time.
//! - [`types::buffers::SampleWindow`] keeps the most recent readings in a bounded FIFO.

pub mod traits;
pub mod types;

#[doc(inline)]
pub use traits::{IMUSample, IMUUntimedSample};
#[doc(inline)]
pub use types::buffers::{CircularBuffer, SampleWindow, SAMPLE_RATE_HZ, WINDOW_CAPACITY};
#[doc(inline)]
pub use types::timed::Sample3D;
#[doc(inline)]
pub use types::untimed::XYZ;
#[doc(inline)]
pub use types::Axis;
