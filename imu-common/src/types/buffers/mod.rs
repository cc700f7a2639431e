pub mod circular_buffer;
pub mod sample_window;

pub use crate::types::buffers::circular_buffer::CircularBuffer;
pub use crate::types::buffers::sample_window::{SampleWindow, SAMPLE_RATE_HZ, WINDOW_CAPACITY};
