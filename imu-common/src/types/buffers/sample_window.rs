use crate::traits::{IMUSample, IMUUntimedSample};
use crate::types::buffers::CircularBuffer;
use crate::types::timed::Sample3D;
use crate::types::Axis;

/// Nominal accelerometer sample rate.
pub const SAMPLE_RATE_HZ: f64 = 100.0;

/// 10 seconds of readings at [`SAMPLE_RATE_HZ`].
pub const WINDOW_CAPACITY: usize = 1000;

/// Most recent accelerometer readings, oldest first.
///
/// The window is written by a single producer. Readers work on a [`SampleWindow::snapshot`]
/// so they never observe a window in the middle of an update.
///
/// ```
/// use imu_common::types::buffers::SampleWindow;
/// use imu_common::types::timed::Sample3D;
/// use imu_common::types::Axis;
///
/// let mut window = SampleWindow::new(2);
/// window.push(Sample3D::new(0.00, [0.1, 0.0, 1.0]));
/// window.push(Sample3D::new(0.01, [0.2, 0.0, 1.0]));
/// window.push(Sample3D::new(0.02, [0.3, 0.0, 1.0]));
///
/// assert!(window.is_full());
/// assert_eq!(window.channel(Axis::X), vec![0.2, 0.3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SampleWindow {
    samples: CircularBuffer<Sample3D>,
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::new(WINDOW_CAPACITY)
    }
}

impl SampleWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: CircularBuffer::new(capacity),
        }
    }

    /// Appends `sample`, evicting and returning the oldest one when the window is full.
    pub fn push(&mut self, sample: Sample3D) -> Option<Sample3D> {
        self.samples.push(sample)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample3D> {
        self.samples.iter()
    }

    /// Values recorded on `axis`, oldest first.
    pub fn channel(&self, axis: Axis) -> Vec<f64> {
        self.samples
            .iter()
            .map(|s| s.get_measurement().get_axis(axis))
            .collect()
    }

    /// The three channels in axis order.
    pub fn channels(&self) -> [Vec<f64>; 3] {
        Axis::ALL.map(|axis| self.channel(axis))
    }

    /// Deep copy of the current contents.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}
