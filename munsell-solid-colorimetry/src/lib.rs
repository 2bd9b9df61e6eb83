//! Colorimetry for the Munsell renotation dataset
//!
//! This crate converts renotation measurements (Munsell value plus CIE xyY
//! chromaticity under illuminant C) into display-ready sRGB colors:
//! - Value-to-luminance polynomial and reflectance normalization
//! - xyY to XYZ conversion
//! - Bradford chromatic adaptation from illuminant C to D65
//! - XYZ to sRGB with gamma companding, gamut testing, hex encoding

pub mod adaptation;
pub mod srgb;
pub mod value;
pub mod xyy;

pub use adaptation::*;
pub use srgb::*;
pub use value::*;
pub use xyy::*;

/// Convert one renotation xyY measurement to D65-adapted XYZ.
///
/// The luminance component is expected to already be reflectance-adjusted
/// (see [`value::REFLECTANCE_COEFF`]).
pub fn renotation_to_xyz(xyy: [f64; 3]) -> [f64; 3] {
    adaptation::c_to_d65(xyy::xyy_to_xyz(xyy))
}

/// Achromatic (neutral) color for a Munsell value, encoded as sRGB hex
pub fn neutral_hex(value: f64) -> String {
    let [xw, yw, zw] = adaptation::ILLUMINANT_C_WHITE;
    let y = value::munsell_value_to_luminance(value);
    let xyz = [
        xw * y / yw * value::REFLECTANCE_COEFF,
        y * value::REFLECTANCE_COEFF,
        zw * y / yw * value::REFLECTANCE_COEFF,
    ];
    srgb::to_hex(srgb::xyz_to_srgb(adaptation::c_to_d65(xyz)))
}
