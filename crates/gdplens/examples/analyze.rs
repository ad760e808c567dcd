//! Example: run all eight analyses over a GDP data file.
//!
//! Usage:
//!   cargo run --example analyze -- <data.csv> <config.json>

use std::env;
use std::path::Path;

use gdplens::output::ConsoleSink;
use gdplens::{GdpLens, ResultSink, RunConfig};

fn main() -> gdplens::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example analyze -- <data.csv> <config.json>");
        std::process::exit(1);
    }

    let data_path = Path::new(&args[1]);
    let config_path = Path::new(&args[2]);

    if !data_path.exists() {
        eprintln!("Error: File not found: {}", data_path.display());
        std::process::exit(1);
    }

    let config = RunConfig::load(config_path)?;
    let lens = GdpLens::new(config);
    let outcome = lens.run(data_path)?;

    println!(
        "Loaded {} ({} raw rows, {} records)",
        outcome.source.file, outcome.source.row_count, outcome.summary.records
    );
    if let Some((first, last)) = outcome.summary.year_span {
        println!("Years observed: {first}-{last}");
    }

    ConsoleSink::new().write(&outcome.results)?;

    Ok(())
}
