//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gdplens::OutputMode;

/// Gdplens: GDP time-series analytics
#[derive(Parser)]
#[command(name = "gdplens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run all analyses over a data file and render the results
    Run {
        /// Path to the data file (CSV or JSON, per the configuration)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Path to the run configuration file
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// Override the configured sink (console, charts)
        #[arg(short, long)]
        output: Option<OutputMode>,

        /// Directory for chart images
        #[arg(long, default_value = ".")]
        chart_dir: PathBuf,
    },

    /// Validate a configuration file without running any analysis
    Check {
        /// Path to the run configuration file
        #[arg(value_name = "CONFIG", default_value = "config.json")]
        config: PathBuf,
    },
}
