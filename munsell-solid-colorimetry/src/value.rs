//! Munsell value to luminance

/// Normalization coefficient ensuring that value 10 (the lightest color)
/// maps to Y = 100, the maximum luminance.
pub const REFLECTANCE_COEFF: f64 = 0.9749629514078465;

/// Luminance Y for a Munsell value, per the renotation quintic fit
pub fn munsell_value_to_luminance(v: f64) -> f64 {
    v * (1.2219 + v * (-0.23111 + v * (0.23951 + v * (-0.021009 + v * 0.0008404))))
}
