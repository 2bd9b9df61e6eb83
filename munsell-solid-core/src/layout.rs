//! Placement of color samples within the solid

use crate::hue::ANGULAR_STEP;
use crate::sample::{ColorSample, PlacedPoint, Point3f};

/// Layout constants for the color solid.
///
/// `level_height` is the vertical spacing per unit of Munsell value,
/// `hue_spacing` the radial spacing per unit of chroma, and
/// `reference_value` the value that sits on the horizontal plane through
/// the origin (higher values render above it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidLayout {
    pub level_height: f32,
    pub hue_spacing: f32,
    pub stroke: f32,
    pub reference_value: f32,
}

impl Default for SolidLayout {
    fn default() -> Self {
        Self {
            level_height: 15.0,
            hue_spacing: 15.0,
            stroke: 8.0,
            reference_value: 5.0,
        }
    }
}

impl SolidLayout {
    /// Place one sample in the solid.
    ///
    /// The hue index selects an angle around the vertical axis, chroma the
    /// distance from it, and value the height. Pure and total: no bounds
    /// checking is performed, an out-of-range hue index wraps around the
    /// circle and NaN inputs yield a NaN position.
    pub fn place(&self, sample: &ColorSample) -> PlacedPoint {
        let angle = ANGULAR_STEP * sample.hue_index as f32;
        let radius = self.hue_spacing * sample.chroma / 2.0;
        let x = angle.cos() * radius;
        let z = angle.sin() * radius;
        let y = (self.reference_value - sample.value) * self.level_height;
        PlacedPoint {
            position: Point3f::new(x, y, z),
            stroke: self.stroke,
            color: sample.hex.clone(),
        }
    }

    /// Place every sample in input order
    pub fn place_all(&self, samples: &[ColorSample]) -> Vec<PlacedPoint> {
        samples.iter().map(|sample| self.place(sample)).collect()
    }
}
