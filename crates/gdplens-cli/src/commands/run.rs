//! Run command - execute the full analysis pipeline over a data file.

use std::path::PathBuf;

use colored::Colorize;
use gdplens::{output, GdpLens, OutputMode, RunConfig};

pub fn run(
    file: PathBuf,
    config_path: PathBuf,
    output_override: Option<OutputMode>,
    chart_dir: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let mut config = RunConfig::load(&config_path)?;
    if let Some(mode) = output_override {
        config.output = mode;
    }

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        file.display().to_string().white()
    );

    let lens = GdpLens::new(config);
    let outcome = lens.run(&file)?;

    if verbose {
        println!();
        println!("{}", "Source:".yellow().bold());
        println!("  file:    {}", outcome.source.file);
        println!("  format:  {}", outcome.source.format);
        println!("  hash:    {}", outcome.source.hash);
        println!("  rows:    {}", outcome.source.row_count);
        println!("  records: {}", outcome.summary.records);
        if let Some((first, last)) = outcome.summary.year_span {
            println!("  years:   {first}-{last}");
        }
    }

    if lens.config().output == OutputMode::Charts {
        std::fs::create_dir_all(&chart_dir)?;
    }

    let sink = output::open_sink(lens.config().output, &chart_dir);
    sink.write(&outcome.results)?;

    Ok(())
}
