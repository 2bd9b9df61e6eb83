//! Error types for munsell-solid

use thiserror::Error;

/// Main error type for munsell-solid operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for munsell-solid operations
pub type Result<T> = std::result::Result<T, Error>;
