//! Check command - validate a configuration file without running.

use std::path::PathBuf;

use colored::Colorize;
use gdplens::RunConfig;

pub fn run(config_path: PathBuf, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig::load(&config_path)?;

    println!(
        "{} {}",
        "Valid configuration".green().bold(),
        config_path.display().to_string().white()
    );
    println!();
    println!("  region:        {}", config.query.region);
    println!("  year:          {}", config.query.year);
    println!(
        "  year range:    {}-{}",
        config.query.year_range.start, config.query.year_range.end
    );
    println!("  decline years: {}", config.query.decline_years);
    println!("  input:         {}", config.input);
    println!("  output:        {}", config.output);

    Ok(())
}
