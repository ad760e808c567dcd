//! Long-form CSV driver.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use super::source::{is_missing_value, read_and_hash, RawRow, SourceMetadata};
use super::InputSource;
use crate::error::{GdplensError, Result};

/// Header aliases resolved per column; first match wins.
const COUNTRY_ALIASES: &[&str] = &["Country Name", "Name"];
const REGION_ALIASES: &[&str] = &["Region", "Continent"];
const YEAR_ALIASES: &[&str] = &["Year"];
const VALUE_ALIASES: &[&str] = &["Value"];

/// Driver for long-form CSV files, one observation per row.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl InputSource for CsvSource {
    fn load(&self) -> Result<(Vec<RawRow>, SourceMetadata)> {
        let (contents, hash, size_bytes) = read_and_hash(&self.path)?;

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(contents.as_slice());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let country = find_column(&headers, COUNTRY_ALIASES)?;
        let region = find_column(&headers, REGION_ALIASES)?;
        let year = find_column(&headers, YEAR_ALIASES)?;
        let value = find_column(&headers, VALUE_ALIASES)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(RawRow {
                country: field(&record, country),
                region: field(&record, region),
                year: field(&record, year),
                value: field(&record, value),
            });
        }

        let row_count = rows.len();
        let source =
            SourceMetadata::new(self.path.clone(), hash, size_bytes, "csv".to_string(), row_count);
        Ok((rows, source))
    }
}

/// Resolve a column index from its aliases.
fn find_column(headers: &[String], aliases: &[&str]) -> Result<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h.eq_ignore_ascii_case(alias)))
        .ok_or_else(|| GdplensError::MissingColumn(aliases[0].to_string()))
}

/// Extract a field, mapping NaN-like sentinels to missing.
fn field(record: &csv::StringRecord, index: usize) -> Option<String> {
    let raw = record.get(index)?;
    if is_missing_value(raw) {
        None
    } else {
        Some(raw.trim().to_string())
    }
}
