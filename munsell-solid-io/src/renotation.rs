//! Munsell renotation table and dataset building
//!
//! The renotation table (`real.dat`) is a space-delimited file with one
//! header row, then `h V C x y Y` per row: hue notation, value, chroma,
//! and the measured xyY chromaticity under illuminant C. The
//! [`DatasetBuilder`] turns those rows into render-ready records.

use munsell_solid_colorimetry as colorimetry;
use munsell_solid_core::{hue_index, Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One row of the renotation table
#[derive(Debug, Clone, PartialEq)]
pub struct RenotationEntry {
    pub hue: String,
    pub value: f32,
    pub chroma: f32,
    /// Measured chromaticity (x, y, Y) under illuminant C
    pub xyy: [f64; 3],
}

/// Read the space-delimited renotation table
pub fn read_renotation<P: AsRef<Path>>(path: P) -> Result<Vec<RenotationEntry>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut entries = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line_no == 0 || line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(Error::InvalidData(format!(
                "renotation line {}: expected 6 fields, found {}",
                line_no + 1,
                fields.len()
            )));
        }
        let number = |field: &str| -> Result<f64> {
            field.parse().map_err(|_| {
                Error::InvalidData(format!(
                    "renotation line {}: not a number: {:?}",
                    line_no + 1,
                    field
                ))
            })
        };
        entries.push(RenotationEntry {
            hue: fields[0].to_string(),
            value: number(fields[1])? as f32,
            chroma: number(fields[2])? as f32,
            xyy: [number(fields[3])?, number(fields[4])?, number(fields[5])?],
        });
    }

    Ok(entries)
}

/// Which side of the sRGB gamut boundary to keep when building a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamutKeep {
    /// Only colors representable in sRGB (the default)
    #[default]
    InGamut,
    /// Only colors outside the sRGB gamut
    OutOfGamut,
    /// Everything
    All,
}

/// A record of the rendering dataset.
///
/// The optional fields are only populated by full-format builds and are
/// skipped during serialization otherwise, so plain and full datasets
/// share one format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRecord {
    #[serde(rename = "h", skip_serializing_if = "Option::is_none")]
    pub hue: Option<String>,
    #[serde(rename = "hidx")]
    pub hue_index: i32,
    #[serde(rename = "V", serialize_with = "compact_number")]
    pub value: f32,
    #[serde(rename = "C", serialize_with = "compact_number")]
    pub chroma: f32,
    #[serde(rename = "x", skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(rename = "y", skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(rename = "Y", skip_serializing_if = "Option::is_none")]
    pub luminance: Option<f64>,
    pub hex: String,
}

// The reference dataset stores whole values and chromas as JSON integers;
// only fractional ones need a float.
fn compact_number<S>(number: &f32, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if number.is_finite() && *number >= 0.0 && number.fract() == 0.0 {
        serializer.serialize_u32(*number as u32)
    } else {
        serializer.serialize_f32(*number)
    }
}

/// Builds a rendering dataset from renotation entries
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetBuilder {
    keep: GamutKeep,
    full: bool,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select which side of the sRGB gamut boundary to keep
    pub fn keep(mut self, keep: GamutKeep) -> Self {
        self.keep = keep;
        self
    }

    /// Also carry the hue notation and xyY data on each record
    pub fn full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    /// Convert renotation entries into dataset records.
    ///
    /// Each entry's luminance is reflectance-adjusted, the chromaticity is
    /// adapted from illuminant C to D65, gamut-filtered per [`GamutKeep`],
    /// and encoded as sRGB hex. Neutral (achromatic) records for values
    /// 0..=10 are appended unless only out-of-gamut colors are kept.
    pub fn build(&self, entries: &[RenotationEntry]) -> Result<Vec<DatasetRecord>> {
        let mut records = Vec::new();

        for entry in entries {
            let [x, y, luminance] = entry.xyy;
            let xyz = colorimetry::renotation_to_xyz([
                x,
                y,
                luminance * colorimetry::REFLECTANCE_COEFF,
            ]);
            let inside = colorimetry::in_gamut(xyz);
            match self.keep {
                GamutKeep::InGamut if !inside => continue,
                GamutKeep::OutOfGamut if inside => continue,
                _ => {}
            }
            records.push(DatasetRecord {
                hue: self.full.then(|| entry.hue.clone()),
                hue_index: hue_index(&entry.hue)? as i32,
                value: entry.value,
                chroma: entry.chroma,
                x: self.full.then_some(x),
                y: self.full.then_some(y),
                luminance: self.full.then_some(luminance),
                hex: colorimetry::to_hex(colorimetry::xyz_to_srgb(xyz)),
            });
        }

        if self.keep != GamutKeep::OutOfGamut {
            records.extend((0..=10).map(|v| self.neutral_record(v)));
        }

        Ok(records)
    }

    fn neutral_record(&self, value: u32) -> DatasetRecord {
        let (x, y) = if value == 0 {
            (0.0, 0.0)
        } else {
            // Achromatic chromaticity is the illuminant C white point.
            let [xw, yw, zw] = colorimetry::ILLUMINANT_C_WHITE;
            (xw / (xw + yw + zw), yw / (xw + yw + zw))
        };
        DatasetRecord {
            hue: self.full.then(|| "N".to_string()),
            hue_index: 0,
            value: value as f32,
            chroma: 0.0,
            x: self.full.then_some(x),
            y: self.full.then_some(y),
            luminance: self
                .full
                .then(|| colorimetry::munsell_value_to_luminance(value as f64)),
            hex: colorimetry::neutral_hex(value as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // Chromaticity of a dim neutral gray; comfortably inside sRGB.
    const GRAY: [f64; 3] = [0.3101, 0.3163, 20.0];
    // A near-spectral red; far outside sRGB.
    const DEEP_RED: [f64; 3] = [0.713, 0.216, 20.0];

    fn entry(hue: &str, value: f32, chroma: f32, xyy: [f64; 3]) -> RenotationEntry {
        RenotationEntry {
            hue: hue.to_string(),
            value,
            chroma,
            xyy,
        }
    }

    #[test]
    fn test_read_renotation_table() {
        let temp_file = "test_renotation.dat";
        let content = "  h  V  C      x      y      Y\n\
                       2.5R  1  2  0.713  0.216  1.21\n\
                       10RP  9  6  0.348  0.302  76.7\n";
        fs::write(temp_file, content).unwrap();

        let entries = read_renotation(temp_file).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hue, "2.5R");
        assert_eq!(entries[0].value, 1.0);
        assert_eq!(entries[0].chroma, 2.0);
        assert_eq!(entries[0].xyy, [0.713, 0.216, 1.21]);
        assert_eq!(entries[1].hue, "10RP");

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_read_renotation_rejects_short_rows() {
        let temp_file = "test_renotation_short.dat";
        fs::write(temp_file, "h V C x y Y\n2.5R 1 2 0.713\n").unwrap();

        assert!(matches!(
            read_renotation(temp_file),
            Err(Error::InvalidData(_))
        ));

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_build_filters_by_gamut() {
        let entries = vec![
            entry("2.5R", 5.0, 2.0, GRAY),
            entry("5R", 4.0, 14.0, DEEP_RED),
        ];

        let in_gamut = DatasetBuilder::new().build(&entries).unwrap();
        // The gray survives, the deep red does not; 11 neutrals follow.
        assert_eq!(in_gamut.len(), 1 + 11);
        assert_eq!(in_gamut[0].hue_index, 0);
        assert!(in_gamut[0].hex.starts_with('#'));

        let out_of_gamut = DatasetBuilder::new()
            .keep(GamutKeep::OutOfGamut)
            .build(&entries)
            .unwrap();
        assert_eq!(out_of_gamut.len(), 1);
        assert_eq!(out_of_gamut[0].hue_index, 1);

        let all = DatasetBuilder::new()
            .keep(GamutKeep::All)
            .build(&entries)
            .unwrap();
        assert_eq!(all.len(), 2 + 11);
    }

    #[test]
    fn test_full_records_carry_source_data() {
        let entries = vec![entry("7.5GY", 6.0, 8.0, GRAY)];
        let records = DatasetBuilder::new()
            .keep(GamutKeep::All)
            .full(true)
            .build(&entries)
            .unwrap();

        let first = &records[0];
        assert_eq!(first.hue.as_deref(), Some("7.5GY"));
        assert_eq!(first.hue_index, 14);
        assert_eq!(first.x, Some(0.3101));
        assert_eq!(first.luminance, Some(20.0));

        let neutral = records.last().unwrap();
        assert_eq!(neutral.hue.as_deref(), Some("N"));
        assert_eq!(neutral.value, 10.0);
        assert_eq!(neutral.chroma, 0.0);
    }

    #[test]
    fn test_plain_records_skip_optional_fields() {
        let entries = vec![entry("2.5R", 5.0, 2.0, GRAY)];
        let records = DatasetBuilder::new().build(&entries).unwrap();
        let json = serde_json::to_string(&records[0]).unwrap();
        assert!(!json.contains("\"h\""));
        assert!(!json.contains("\"x\""));
        assert!(json.contains("\"hidx\":0"));
    }

    #[test]
    fn test_whole_values_serialize_as_integers() {
        let entries = vec![
            entry("2.5R", 5.0, 2.0, GRAY),
            entry("5R", 2.5, 2.0, GRAY),
        ];
        let records = DatasetBuilder::new()
            .keep(GamutKeep::All)
            .build(&entries)
            .unwrap();

        let whole = serde_json::to_string(&records[0]).unwrap();
        assert!(whole.contains("\"V\":5,"));
        assert!(whole.contains("\"C\":2,"));
        // Fractional values keep their float form.
        let fractional = serde_json::to_string(&records[1]).unwrap();
        assert!(fractional.contains("\"V\":2.5,"));
    }

    #[test]
    fn test_unknown_hue_notation_fails_build() {
        let entries = vec![entry("3R", 5.0, 2.0, GRAY)];
        assert!(matches!(
            DatasetBuilder::new().keep(GamutKeep::All).build(&entries),
            Err(Error::InvalidData(_))
        ));
    }
}
