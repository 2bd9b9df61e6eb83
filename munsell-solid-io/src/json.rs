//! Rendering dataset JSON format

use munsell_solid_core::{ColorSample, Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Options controlling JSON dataset output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriteOptions {
    /// Pretty-print with indentation for human-readable output
    pub indent: bool,
}

/// Read a JSON dataset into color samples.
///
/// Individual records may omit fields (see [`ColorSample`]); only a
/// structurally malformed document is an error.
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<Vec<ColorSample>> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::InvalidData(format!("malformed dataset JSON: {}", e)))
}

/// Write dataset records as a JSON array
pub fn write_samples<T: Serialize, P: AsRef<Path>>(
    samples: &[T],
    path: P,
    options: &JsonWriteOptions,
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let result = if options.indent {
        serde_json::to_writer_pretty(writer, samples)
    } else {
        serde_json::to_writer(writer, samples)
    };
    result.map_err(|e| Error::InvalidData(format!("failed to encode dataset JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_json_round_trip() {
        let temp_file = "test_round_trip.json";
        let samples = vec![
            ColorSample::new(0, 5.0, 2.0, "#ff0000"),
            ColorSample::new(39, 8.0, 12.0, "#f4a7c0"),
        ];
        write_samples(&samples, temp_file, &JsonWriteOptions::default()).unwrap();

        let loaded = read_samples(temp_file).unwrap();
        assert_eq!(loaded, samples);

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_indented_output_is_readable() {
        let temp_file = "test_indented.json";
        let samples = vec![ColorSample::new(4, 6.0, 8.0, "#c08080")];
        write_samples(&samples, temp_file, &JsonWriteOptions { indent: true }).unwrap();

        let content = fs::read_to_string(temp_file).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("\"hidx\": 4"));

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_permissive_records() {
        let temp_file = "test_permissive.json";
        fs::write(temp_file, r##"[{"hidx": 2, "hex": "#334455"}, {}]"##).unwrap();

        let loaded = read_samples(temp_file).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].hue_index, 2);
        assert!(loaded[0].chroma.is_nan());
        assert_eq!(loaded[1].hue_index, 0);
        assert!(loaded[1].value.is_nan());

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_malformed_document_is_invalid_data() {
        let temp_file = "test_malformed.json";
        fs::write(temp_file, "{not json").unwrap();

        assert!(matches!(
            read_samples(temp_file),
            Err(Error::InvalidData(_))
        ));

        fs::remove_file(temp_file).unwrap();
    }
}
