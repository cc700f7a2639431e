use num_enum::TryFromPrimitive;
use std::fmt;

/// Accelerometer axis. The discriminant is the axis row in exported recordings.
///
/// ```
/// use imu_common::types::Axis;
///
/// assert_eq!(usize::from(Axis::Z), 2);
/// assert_eq!(Axis::try_from(1usize).unwrap(), Axis::Y);
/// ```
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl From<Axis> for usize {
    fn from(value: Axis) -> Self {
        value as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}
