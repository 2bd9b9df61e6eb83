//! The Munsell hue circle
//!
//! The circle is divided into 40 equal angular steps: ten hue families,
//! each split into four increments. Index 0 is 2.5R, index 39 is 10RP.

use crate::{Error, Result};
use std::sync::OnceLock;

/// Hue families in circle order
pub const HUE_FAMILIES: [&str; 10] = ["R", "YR", "Y", "GY", "G", "BG", "B", "PB", "P", "RP"];

/// Increments within each family, in circle order
pub const HUE_INCREMENTS: [&str; 4] = ["2.5", "5", "7.5", "10"];

/// Number of equal angular steps around the hue circle
pub const HUE_STEPS: usize = 40;

/// Radians per hue-index unit
pub const ANGULAR_STEP: f32 = std::f32::consts::TAU / HUE_STEPS as f32;

/// All 40 hue notations in circle order: "2.5R", "5R", ..., "10RP"
pub fn hue_notations() -> Vec<String> {
    HUE_FAMILIES
        .iter()
        .flat_map(|family| {
            HUE_INCREMENTS
                .iter()
                .map(move |increment| format!("{}{}", increment, family))
        })
        .collect()
}

/// Look up the circle index of a hue notation such as "7.5GY".
///
/// The notation table is built once and reused across lookups.
pub fn hue_index(notation: &str) -> Result<usize> {
    static TABLE: OnceLock<Vec<String>> = OnceLock::new();
    TABLE
        .get_or_init(hue_notations)
        .iter()
        .position(|n| n == notation)
        .ok_or_else(|| Error::InvalidData(format!("unknown Munsell hue notation: {}", notation)))
}
