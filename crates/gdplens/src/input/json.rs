//! JSON driver for long- and wide-form record arrays.
//!
//! Wide-form exports carry one object per country with all-digit keys
//! for the year columns; those are melted into one raw row per year.
//! Long-form exports (objects with a `Year` field) pass through as-is.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::source::{is_missing_value, read_and_hash, RawRow, SourceMetadata};
use super::InputSource;
use crate::error::{GdplensError, Result};

// Sentinels that show up inside otherwise-valid JSON exports: bare NaN
// tokens, and a corrupt marker some upstream dumps contain. Both are
// rewritten to null before parsing.
static NAN_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bNaN\b").unwrap());
static CORRUPT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#@\$!\\").unwrap());

const COUNTRY_ALIASES: &[&str] = &["Country Name", "Name"];
const REGION_ALIASES: &[&str] = &["Region", "Continent"];

/// Driver for JSON record arrays.
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl InputSource for JsonSource {
    fn load(&self) -> Result<(Vec<RawRow>, SourceMetadata)> {
        let (contents, hash, size_bytes) = read_and_hash(&self.path)?;

        let text = String::from_utf8_lossy(&contents);
        let text = NAN_TOKEN.replace_all(&text, "null");
        let text = CORRUPT_TOKEN.replace_all(&text, "null");

        let parsed: Value = serde_json::from_str(&text)?;
        let Value::Array(items) = parsed else {
            return Err(GdplensError::UnsupportedFormat(
                "expected a JSON array of records".to_string(),
            ));
        };

        let mut rows = Vec::new();
        for item in &items {
            let Value::Object(fields) = item else {
                continue;
            };
            if fields.contains_key("Year") {
                rows.push(long_row(fields));
            } else {
                melt_wide_row(fields, &mut rows);
            }
        }

        let row_count = rows.len();
        let source =
            SourceMetadata::new(self.path.clone(), hash, size_bytes, "json".to_string(), row_count);
        Ok((rows, source))
    }
}

/// A record already in long form: one observation per object.
fn long_row(fields: &Map<String, Value>) -> RawRow {
    RawRow {
        country: text_field(fields, COUNTRY_ALIASES),
        region: text_field(fields, REGION_ALIASES),
        year: scalar_field(fields.get("Year")),
        value: scalar_field(fields.get("Value")),
    }
}

/// A wide-form record: every all-digit key is a year column. Identity
/// fields are repeated into each emitted row.
fn melt_wide_row(fields: &Map<String, Value>, rows: &mut Vec<RawRow>) {
    let country = text_field(fields, COUNTRY_ALIASES);
    let region = text_field(fields, REGION_ALIASES);

    for (key, value) in fields {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        rows.push(RawRow {
            country: country.clone(),
            region: region.clone(),
            year: Some(key.clone()),
            value: scalar_field(Some(value)),
        });
    }
}

/// Alias-aware string field lookup.
fn text_field(fields: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|alias| fields.get(*alias))
        .and_then(|v| match v {
            Value::String(s) if !is_missing_value(s) => Some(s.trim().to_string()),
            _ => None,
        })
}

/// Numeric-or-string scalar rendered to raw text; null and sentinels are
/// missing.
fn scalar_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !is_missing_value(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_long_form() {
        let file = create_test_file(
            r#"[
                {"Country Name": "USA", "Region": "North America", "Year": 2010, "Value": 100.5},
                {"Country Name": "CAN", "Region": "North America", "Year": "2011", "Value": null}
            ]"#,
        );

        let (rows, source) = JsonSource::new(file.path()).load().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year.as_deref(), Some("2010"));
        assert_eq!(rows[0].value.as_deref(), Some("100.5"));
        assert_eq!(rows[1].year.as_deref(), Some("2011"));
        assert_eq!(rows[1].value, None);
        assert_eq!(source.format, "json");
    }

    #[test]
    fn test_melt_wide_form() {
        let file = create_test_file(
            r#"[
                {"Country Name": "USA", "Continent": "North America",
                 "Indicator Name": "GDP", "2010": 100, "2011": 110},
                {"Country Name": "CAN", "Continent": "North America",
                 "Indicator Name": "GDP", "2010": 50, "2011": null}
            ]"#,
        );

        let (rows, _) = JsonSource::new(file.path()).load().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].country.as_deref(), Some("USA"));
        assert_eq!(rows[0].region.as_deref(), Some("North America"));
        assert_eq!(rows[0].year.as_deref(), Some("2010"));
        assert_eq!(rows[0].value.as_deref(), Some("100"));
        assert_eq!(rows[3].country.as_deref(), Some("CAN"));
        assert_eq!(rows[3].value, None);
    }

    #[test]
    fn test_nan_token_scrubbed() {
        let file = create_test_file(
            r#"[{"Country Name": "USA", "Region": "NA-region", "Year": 2010, "Value": NaN}]"#,
        );

        let (rows, _) = JsonSource::new(file.path()).load().unwrap();
        assert_eq!(rows[0].value, None);
    }

    #[test]
    fn test_corrupt_token_scrubbed() {
        let file = create_test_file(
            r#"[{"Country Name": "USA", "Region": "North America", "Year": 2010, "Value": #@$!\}]"#,
        );

        let (rows, _) = JsonSource::new(file.path()).load().unwrap();
        assert_eq!(rows[0].value, None);
    }

    #[test]
    fn test_non_array_rejected() {
        let file = create_test_file(r#"{"Country Name": "USA"}"#);

        let err = JsonSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, GdplensError::UnsupportedFormat(_)));
    }
}
