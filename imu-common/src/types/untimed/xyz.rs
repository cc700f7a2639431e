use nalgebra::Vector3;
#[cfg(any(feature = "serde-serialize", test))]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(any(feature = "serde-serialize", test))]
use serde_json::Value;

use std::ops::{Add, Mul, Sub};

use crate::traits::IMUUntimedSample;
use crate::types::Axis;

pub const N_XYZ_COORDINATES: usize = 3;

/// Tri-axial acceleration reading in g.
#[derive(Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct XYZ(Vector3<f64>);

impl XYZ {
    pub fn new(data: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(data))
    }

    pub fn from_vector(data: Vector3<f64>) -> Self {
        Self(data)
    }

    pub fn inner(&self) -> [f64; N_XYZ_COORDINATES] {
        [self.0.x, self.0.y, self.0.z]
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }
}

impl IMUUntimedSample for XYZ {
    fn get_axis(&self, axis: Axis) -> f64 {
        self.0[usize::from(axis)]
    }
}

impl From<XYZ> for [f64; N_XYZ_COORDINATES] {
    fn from(value: XYZ) -> Self {
        value.inner()
    }
}

impl From<[f64; N_XYZ_COORDINATES]> for XYZ {
    fn from(value: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(value))
    }
}

impl TryFrom<Vec<f64>> for XYZ {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.len() != N_XYZ_COORDINATES {
            return Err("Can't convert to XYZ");
        }
        Ok(Self(Vector3::from_vec(value)))
    }
}

impl Add for XYZ {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for XYZ {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for XYZ {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(any(feature = "serde-serialize", test))]
impl Serialize for XYZ {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let json = serde_json::json!({
            "x": self.0.x,
            "y": self.0.y,
            "z": self.0.z
        });
        json.serialize(serializer)
    }
}

#[cfg(any(feature = "serde-serialize", test))]
impl<'de> Deserialize<'de> for XYZ {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Value = Value::deserialize(deserializer)?;

        // [x, y, z]
        if let Some(arr) = value.as_array() {
            if arr.len() == N_XYZ_COORDINATES {
                let coords = arr
                    .iter()
                    .map(|v| {
                        v.as_f64().ok_or_else(|| {
                            serde::de::Error::custom(format!("XYZ coordinate {} is not a number", v))
                        })
                    })
                    .collect::<Result<Vec<f64>, D::Error>>()?;
                return Ok(XYZ(Vector3::from_column_slice(&coords)));
            }
        }

        // {"x": .., "y": .., "z": ..}, missing labels read as 0
        if let Some(obj) = value.as_object() {
            let coord = |label: &str| -> Result<f64, D::Error> {
                match obj.get(label) {
                    None => Ok(0.0),
                    Some(v) => v.as_f64().ok_or_else(|| {
                        serde::de::Error::custom(format!("XYZ label {} is not a number", label))
                    }),
                }
            };
            return Ok(XYZ(Vector3::new(coord("x")?, coord("y")?, coord("z")?)));
        }

        Err(serde::de::Error::custom("Invalid format for XYZ"))
    }
}
