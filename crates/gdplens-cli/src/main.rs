//! Gdplens CLI - GDP time-series analytics.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            config,
            output,
            chart_dir,
        } => commands::run::run(file, config, output, chart_dir, cli.verbose),

        Commands::Check { config } => commands::check::run(config, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
