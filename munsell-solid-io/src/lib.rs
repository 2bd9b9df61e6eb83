//! Dataset I/O for munsell-solid
//!
//! This crate reads and writes the rendering dataset (a JSON array of
//! `hidx`/`V`/`C`/`hex` records) and parses the Munsell renotation table
//! it is built from.

pub mod json;
pub mod renotation;

pub use json::JsonWriteOptions;
pub use renotation::{DatasetBuilder, DatasetRecord, GamutKeep, RenotationEntry};

use munsell_solid_core::{ColorSample, Error, Result};
use std::path::Path;

/// Auto-detect format and read a color sample dataset
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<Vec<ColorSample>> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => json::read_samples(path),
        _ => Err(Error::UnsupportedFormat(format!(
            "unsupported dataset format: {:?}",
            path.extension()
        ))),
    }
}
