//! Pipeline facade tying drivers, normalizer, and engine together.

use std::path::Path;

use crate::analysis::{analyze, Analysis};
use crate::config::RunConfig;
use crate::dataset::{normalize, DatasetSummary};
use crate::error::Result;
use crate::input::{open_source, RawRow, SourceMetadata};

/// One full analysis run over a validated configuration.
///
/// Configuration and dataset are immutable once constructed; a run
/// either produces all eight analyses or fails before producing any.
pub struct GdpLens {
    config: RunConfig,
}

/// Everything a run produces, handed to a sink exactly once.
#[derive(Debug)]
pub struct RunOutcome {
    pub source: SourceMetadata,
    pub summary: DatasetSummary,
    pub results: Vec<Analysis>,
}

impl GdpLens {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Load `path` with the configured driver and run all analyses.
    pub fn run(&self, path: impl AsRef<Path>) -> Result<RunOutcome> {
        let driver = open_source(self.config.input, path.as_ref());
        let (rows, source) = driver.load()?;
        let (summary, results) = self.execute(rows);

        Ok(RunOutcome {
            source,
            summary,
            results,
        })
    }

    /// Driver-facing entry point: normalize raw rows and run all
    /// analyses against them.
    pub fn execute(&self, rows: Vec<RawRow>) -> (DatasetSummary, Vec<Analysis>) {
        let dataset = normalize(&rows);
        let results = analyze(&dataset, &self.config.query);
        (dataset.summary(), results)
    }
}
