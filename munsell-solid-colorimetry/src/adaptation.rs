//! Chromatic adaptation between standard illuminants
//!
//! The renotation data is measured under illuminant C; sRGB is defined
//! relative to D65. See <http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html>
//! for the Bradford-adapted matrix used here.

/// Illuminant C white point (X, Y, Z), Y normalized to 100
pub const ILLUMINANT_C_WHITE: [f64; 3] = [98.074, 100.0, 118.232];

/// Bradford chromatic adaptation from illuminant C to D65
pub fn c_to_d65([x, y, z]: [f64; 3]) -> [f64; 3] {
    [
        0.9904476 * x - 0.0071683 * y - 0.0116156 * z,
        -0.0123712 * x + 1.0155950 * y - 0.0029282 * z,
        -0.0035635 * x + 0.0067697 * y + 0.9181569 * z,
    ]
}
