//! XYZ to sRGB conversion and hex encoding
//!
//! The linear matrix is scaled for tristimulus values with Y in 0..=100.
//! Conversion formulas follow <http://www.brucelindbloom.com/Eqn_XYZ_to_RGB.html>.

/// sRGB gamma companding of one linear channel
pub fn gamma(u: f64) -> f64 {
    if u <= 0.0031308 {
        12.92 * u
    } else {
        1.055 * u.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert D65 XYZ (Y in 0..=100) to companded sRGB channels.
///
/// Channels are not clamped; values outside 0..=1 indicate the color lies
/// outside the sRGB gamut.
pub fn xyz_to_srgb([x, y, z]: [f64; 3]) -> [f64; 3] {
    [
        gamma(0.03241003232976359 * x - 0.015373989694887858 * y - 0.004986158819963629 * z),
        gamma(-0.009692242522025166 * x + 0.01875929983695176 * y + 0.00041554226340084706 * z),
        gamma(0.0005563941985197545 * x - 0.0020401120612391 * y + 0.010571489771875336 * z),
    ]
}

/// Whether a D65 XYZ color lies within the sRGB gamut
pub fn in_gamut(xyz: [f64; 3]) -> bool {
    xyz_to_srgb(xyz)
        .iter()
        .all(|channel| (0.0..=1.0).contains(channel))
}

/// Encode companded sRGB channels as a `#rrggbb` hex triplet, clamping
/// each channel into range
pub fn to_hex(rgb: [f64; 3]) -> String {
    let [r, g, b] = rgb.map(|channel| ((255.0 * channel) as i32).clamp(0, 255));
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
