//! Input drivers that load raw rows from flat files.
//!
//! Drivers resolve header aliasing and NaN-like sentinel values; numeric
//! coercion and row dropping happen later, in the normalizer, which is
//! the only conversion point from [`RawRow`] to validated records.

pub mod csv;
pub mod json;
mod source;

use std::path::Path;

use crate::config::InputFormat;
use crate::error::Result;

pub use self::csv::CsvSource;
pub use self::json::JsonSource;
pub use source::{RawRow, SourceMetadata};

/// A driver that loads raw rows from a file path.
pub trait InputSource {
    fn load(&self) -> Result<(Vec<RawRow>, SourceMetadata)>;
}

/// Select the driver for a configured input format.
pub fn open_source(format: InputFormat, path: &Path) -> Box<dyn InputSource> {
    match format {
        InputFormat::Csv => Box::new(CsvSource::new(path)),
        InputFormat::Json => Box::new(JsonSource::new(path)),
    }
}
