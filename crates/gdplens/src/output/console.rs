//! Console sink: one labeled text block per analysis.

use super::{format_amount, ResultSink};
use crate::analysis::{Analysis, AnalysisData, AnalysisKind};
use crate::error::Result;

/// Renders results as a text dashboard on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl ResultSink for ConsoleSink {
    fn write(&self, results: &[Analysis]) -> Result<()> {
        println!("\n========= GDP ANALYSIS DASHBOARD =========\n");

        for analysis in results {
            println!("--- {} ---", analysis.label);
            render(analysis);
            println!();
        }

        Ok(())
    }
}

fn render(analysis: &Analysis) {
    match &analysis.data {
        AnalysisData::Values(values) => {
            for (key, value) in values {
                if is_percentage(analysis.kind) {
                    println!("  {key}: {value}%");
                } else {
                    println!("  {key}: {}", format_amount(*value));
                }
            }
        }
        AnalysisData::Series(series) => {
            for (year, value) in series {
                println!("  {year}: {}", format_amount(*value));
            }
        }
        AnalysisData::RegionGrowth {
            fastest,
            growth_rates,
        } => {
            match fastest {
                Some(region) => println!("  fastest growing: {region}"),
                None => println!("  fastest growing: none"),
            }
            for (region, rate) in growth_rates {
                println!("  {region}: {rate}%");
            }
        }
        AnalysisData::Countries(countries) => {
            if countries.is_empty() {
                println!("  no countries found with consistent decline");
            } else {
                for country in countries {
                    println!("  {country}");
                }
            }
        }
    }
}

fn is_percentage(kind: AnalysisKind) -> bool {
    matches!(kind, AnalysisKind::GrowthRate | AnalysisKind::Contribution)
}
