//! Raw row boundary type and source file metadata.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{GdplensError, Result};

/// One raw observation as loaded by a driver, before normalization.
///
/// Fields hold raw text; `None` marks a value the driver already knows
/// is missing (absent field or NaN-like sentinel).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub country: Option<String>,
    pub region: Option<String>,
    pub year: Option<String>,
    pub value: Option<String>,
}

/// Metadata about the loaded source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Driver format (csv, json).
    pub format: String,
    /// Number of raw rows produced by the driver.
    pub row_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Read a file fully, returning contents, sha-256 hash, and size.
pub(crate) fn read_and_hash(path: &Path) -> Result<(Vec<u8>, String, u64)> {
    let mut file = File::open(path).map_err(|e| GdplensError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents).map_err(|e| GdplensError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&contents);
    let hash = format!("sha256:{:x}", hasher.finalize());
    let size = contents.len() as u64;

    Ok((contents, hash, size))
}

/// Check if a value represents a missing/null observation.
pub(crate) fn is_missing_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed == "."
        || trimmed == "-"
}
