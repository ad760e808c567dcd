//! Result sinks: console text and chart images.

pub mod charts;
pub mod console;

use std::path::Path;

use crate::analysis::Analysis;
use crate::config::OutputMode;
use crate::error::Result;

pub use charts::ChartSink;
pub use console::ConsoleSink;

/// Renders a full run's results. Results are handed over exactly once
/// and never mutated by a sink.
pub trait ResultSink {
    fn write(&self, results: &[Analysis]) -> Result<()>;
}

/// Select the sink for a configured output mode.
pub fn open_sink(mode: OutputMode, chart_dir: &Path) -> Box<dyn ResultSink> {
    match mode {
        OutputMode::Console => Box::new(ConsoleSink::new()),
        OutputMode::Charts => Box::new(ChartSink::new(chart_dir)),
    }
}

/// Format a value with a magnitude suffix: `$1.23T`, `$45.60B`, `$7.80M`,
/// or comma-grouped dollars below a million.
pub fn format_amount(value: f64) -> String {
    if value >= 1e12 {
        return format!("${:.2}T", value / 1e12);
    }
    if value >= 1e9 {
        return format!("${:.2}B", value / 1e9);
    }
    if value >= 1e6 {
        return format!("${:.2}M", value / 1e6);
    }
    format!("${}", group_thousands(value))
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
