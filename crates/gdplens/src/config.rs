//! Run configuration loading and validation.
//!
//! The configuration file is JSON with a closed set of recognized keys.
//! Every key is required and validated here, before any analysis runs;
//! a missing or out-of-range value aborts the run with a config error.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GdplensError, Result};

/// Input driver selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Csv,
    Json,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            _ => Err(format!("Unknown input format: {}. Use csv or json.", s)),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Csv => write!(f, "csv"),
            InputFormat::Json => write!(f, "json"),
        }
    }
}

/// Output sink selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Console,
    Charts,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputMode::Console),
            "charts" => Ok(OutputMode::Charts),
            _ => Err(format!("Unknown output mode: {}. Use console or charts.", s)),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Console => write!(f, "console"),
            OutputMode::Charts => write!(f, "charts"),
        }
    }
}

/// Inclusive year bounds for the trend analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}

/// Analysis parameters consumed once per run, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    /// Target region/continent for the country-level analyses.
    pub region: String,
    /// Target year for the point-in-time rankings.
    pub year: i32,
    /// Inclusive bounds for the trend analyses.
    pub year_range: YearRange,
    /// Window length for decline detection, at least 2.
    pub decline_years: usize,
}

/// Full validated run configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunConfig {
    pub query: Query,
    pub input: InputFormat,
    pub output: OutputMode,
}

/// Raw shape of the configuration file before validation.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    region: Option<String>,
    year: Option<i64>,
    year_range: Option<Vec<i64>>,
    decline_years: Option<i64>,
    input: Option<String>,
    output: Option<String>,
}

impl RunConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| GdplensError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: ConfigFile = serde_json::from_str(&text)?;
        Self::validate(file)
    }

    fn validate(file: ConfigFile) -> Result<Self> {
        let region = file.region.ok_or_else(|| missing("region"))?;
        if region.trim().is_empty() {
            return Err(GdplensError::Config("`region` must not be empty".to_string()));
        }

        let year = int_field("year", file.year)?;

        let raw_range = file.year_range.ok_or_else(|| missing("year_range"))?;
        let &[start, end] = raw_range.as_slice() else {
            return Err(GdplensError::Config(format!(
                "`year_range` must have exactly 2 elements, got {}",
                raw_range.len()
            )));
        };
        let start = year_value("year_range", start)?;
        let end = year_value("year_range", end)?;
        if start > end {
            return Err(GdplensError::Config(format!(
                "`year_range` start {} is after end {}",
                start, end
            )));
        }

        let decline_years = file.decline_years.ok_or_else(|| missing("decline_years"))?;
        if decline_years < 2 {
            return Err(GdplensError::Config(format!(
                "`decline_years` must be at least 2, got {}",
                decline_years
            )));
        }

        let input = file
            .input
            .ok_or_else(|| missing("input"))?
            .parse::<InputFormat>()
            .map_err(GdplensError::Config)?;
        let output = file
            .output
            .ok_or_else(|| missing("output"))?
            .parse::<OutputMode>()
            .map_err(GdplensError::Config)?;

        Ok(Self {
            query: Query {
                region,
                year,
                year_range: YearRange { start, end },
                decline_years: decline_years as usize,
            },
            input,
            output,
        })
    }
}

fn missing(key: &str) -> GdplensError {
    GdplensError::Config(format!("missing config value `{}`", key))
}

fn int_field(key: &str, value: Option<i64>) -> Result<i32> {
    let value = value.ok_or_else(|| missing(key))?;
    year_value(key, value)
}

fn year_value(key: &str, value: i64) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| GdplensError::Config(format!("`{}` value {} is out of range", key, value)))
}
