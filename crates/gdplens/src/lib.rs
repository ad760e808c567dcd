//! Gdplens: analytical summaries for country-level GDP time series.
//!
//! Gdplens ingests GDP observations keyed by country, region, and year,
//! normalizes them into a canonical record shape, and computes a fixed
//! set of eight analytical summaries: top/bottom rankings, per-country
//! growth rates, regional averages, the global trend, the fastest
//! growing region, strict multi-year decline detection, and regional
//! contribution shares. Results render as console text or chart images.
//!
//! # Core Principles
//!
//! - **Pure engine**: every analysis is a deterministic function over an
//!   immutable dataset; empty subsets yield empty results, never errors.
//! - **One conversion point**: raw rows stay weakly typed until the
//!   normalizer coerces them, dropping unusable rows instead of
//!   defaulting them.
//! - **Fail fast**: configuration and data-source problems abort before
//!   any analysis runs; there is no partial output.
//!
//! # Example
//!
//! ```no_run
//! use gdplens::{GdpLens, RunConfig};
//!
//! let config = RunConfig::load("config.json").unwrap();
//! let lens = GdpLens::new(config);
//! let outcome = lens.run("data/gdp_data.csv").unwrap();
//!
//! for analysis in &outcome.results {
//!     println!("{}: {:?}", analysis.label, analysis.data);
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod input;
pub mod output;

mod pipeline;

pub use analysis::{analyze, Analysis, AnalysisData, AnalysisKind};
pub use config::{InputFormat, OutputMode, Query, RunConfig, YearRange};
pub use dataset::{normalize, Dataset, DatasetSummary, Record};
pub use error::{GdplensError, Result};
pub use input::{InputSource, RawRow, SourceMetadata};
pub use output::{ChartSink, ConsoleSink, ResultSink};
pub use pipeline::{GdpLens, RunOutcome};
