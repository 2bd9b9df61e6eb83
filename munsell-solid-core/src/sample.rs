//! Sample types and related functionality

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// One Munsell color as stored in the rendering dataset.
///
/// Field names follow the dataset's wire format: `hidx` is the position on
/// the 40-step hue circle, `V` the Munsell value, `C` the chroma, and `hex`
/// the sRGB display color. Missing numeric fields deserialize to NaN
/// (hue index to 0) rather than rejecting the record; the layout is total
/// over such inputs and simply produces a degenerate point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    #[serde(rename = "hidx", default)]
    pub hue_index: i32,
    #[serde(rename = "V", default = "nan")]
    pub value: f32,
    #[serde(rename = "C", default = "nan")]
    pub chroma: f32,
    #[serde(rename = "hex", default)]
    pub hex: String,
}

fn nan() -> f32 {
    f32::NAN
}

impl ColorSample {
    pub fn new(hue_index: i32, value: f32, chroma: f32, hex: impl Into<String>) -> Self {
        Self {
            hue_index,
            value,
            chroma,
            hex: hex.into(),
        }
    }
}

/// A sample placed in the color solid, ready for engine registration
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPoint {
    pub position: Point3f,
    pub stroke: f32,
    /// Display color, copied verbatim from the sample's hex string
    pub color: String,
}
