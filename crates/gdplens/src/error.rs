//! Error types for the gdplens library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gdplens operations.
#[derive(Debug, Error)]
pub enum GdplensError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Required column absent from the raw data.
    #[error("missing column {0}")]
    MissingColumn(String),

    /// Input file shape not recognized by a driver.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chart rendering error.
    #[error("Chart error: {0}")]
    Chart(String),
}

/// Result type alias for gdplens operations.
pub type Result<T> = std::result::Result<T, GdplensError>;
