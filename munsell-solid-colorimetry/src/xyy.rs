//! CIE xyY chromaticity conversions

/// Convert xyY chromaticity coordinates to XYZ tristimulus values
pub fn xyy_to_xyz([x, y, big_y]: [f64; 3]) -> [f64; 3] {
    [
        x * big_y / y,
        big_y,
        (1.0 - x - y) * big_y / y,
    ]
}
