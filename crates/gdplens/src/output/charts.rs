//! Chart sink: plotters-rendered PNG files, one or more per analysis.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use plotters::prelude::*;

use super::ResultSink;
use crate::analysis::{Analysis, AnalysisData, AnalysisKind};
use crate::error::{GdplensError, Result};

const BAR_SIZE: (u32, u32) = (1000, 500);
const PIE_SIZE: (u32, u32) = (800, 800);

const PALETTE: &[RGBColor] = &[
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Writes chart image files into a target directory, with fixed file
/// names per analysis kind.
pub struct ChartSink {
    dir: PathBuf,
}

impl ChartSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Fixed output file names for an analysis kind. Decline detection
    /// is a plain country list and has no chart rendering.
    pub fn files_for(kind: AnalysisKind) -> &'static [&'static str] {
        match kind {
            AnalysisKind::Top10 => &["top10_gdp.png"],
            AnalysisKind::Bottom10 => &["bottom10_gdp.png"],
            AnalysisKind::GrowthRate => &["growth_rate.png"],
            AnalysisKind::AvgByContinent => &["avg_by_continent.png", "avg_by_continent_pie.png"],
            AnalysisKind::GlobalTrend => &["global_trend.png"],
            AnalysisKind::FastestContinent => &["fastest_continent.png"],
            AnalysisKind::Declining => &[],
            AnalysisKind::Contribution => {
                &["continent_contribution_pie.png", "continent_contribution_bar.png"]
            }
        }
    }
}

impl ResultSink for ChartSink {
    fn write(&self, results: &[Analysis]) -> Result<()> {
        for analysis in results {
            let files = Self::files_for(analysis.kind);
            let label = analysis.label.as_str();

            match (&analysis.data, analysis.kind) {
                (AnalysisData::Values(data), AnalysisKind::Top10 | AnalysisKind::Bottom10) => {
                    self.bar_chart(data, label, "country", "gdp (usd)", files[0])?;
                }
                (AnalysisData::Values(data), AnalysisKind::GrowthRate) => {
                    self.bar_chart(data, label, "country", "growth rate (%)", files[0])?;
                }
                (AnalysisData::Values(data), AnalysisKind::AvgByContinent) => {
                    self.bar_chart(data, label, "continent", "avg gdp (usd)", files[0])?;
                    self.pie_chart(data, label, files[1])?;
                }
                (AnalysisData::Series(series), AnalysisKind::GlobalTrend) => {
                    self.line_chart(series, label, "year", "total gdp (usd)", files[0])?;
                }
                (
                    AnalysisData::RegionGrowth { growth_rates, .. },
                    AnalysisKind::FastestContinent,
                ) => {
                    self.bar_chart(growth_rates, label, "continent", "growth rate (%)", files[0])?;
                }
                (AnalysisData::Values(data), AnalysisKind::Contribution) => {
                    self.pie_chart(data, label, files[0])?;
                    self.bar_chart(data, label, "continent", "contribution (%)", files[1])?;
                }
                _ => {}
            }
        }

        println!("\ncharts saved");
        Ok(())
    }
}

impl ChartSink {
    fn bar_chart(
        &self,
        data: &IndexMap<String, f64>,
        title: &str,
        x_desc: &str,
        y_desc: &str,
        file: &str,
    ) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        let path = self.dir.join(file);
        let root = BitMapBackend::new(&path, BAR_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let hi = data.values().copied().fold(f64::MIN, f64::max);
        let lo = data.values().copied().fold(0.0_f64, f64::min);
        let y_hi = if hi > 0.0 { hi * 1.1 } else { 1.0 };
        let y_lo = if lo < 0.0 { lo * 1.1 } else { 0.0 };
        let labels: Vec<&str> = data.keys().map(String::as_str).collect();

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(90)
            .y_label_area_size(90)
            .build_cartesian_2d(0f64..data.len() as f64, y_lo..y_hi)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .x_labels(labels.len())
            .x_label_formatter(&|x| {
                labels
                    .get(x.floor() as usize)
                    .map(|s| (*s).to_string())
                    .unwrap_or_default()
            })
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(data.values().enumerate().map(|(i, &value)| {
                let color = PALETTE[i % PALETTE.len()];
                Rectangle::new([(i as f64 + 0.15, 0.0), (i as f64 + 0.85, value)], color.filled())
            }))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        Ok(())
    }

    fn line_chart(
        &self,
        series: &BTreeMap<i32, f64>,
        title: &str,
        x_desc: &str,
        y_desc: &str,
        file: &str,
    ) -> Result<()> {
        let (Some((&x_min, _)), Some((&x_max, _))) =
            (series.first_key_value(), series.last_key_value())
        else {
            return Ok(());
        };
        // pad a degenerate single-year axis
        let x_max = if x_min == x_max { x_max + 1 } else { x_max };
        let hi = series.values().copied().fold(f64::MIN, f64::max);
        let y_hi = if hi > 0.0 { hi * 1.1 } else { 1.0 };

        let path = self.dir.join(file);
        let root = BitMapBackend::new(&path, BAR_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(x_min..x_max, 0f64..y_hi)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(LineSeries::new(
                series.iter().map(|(&year, &value)| (year, value)),
                &PALETTE[0],
            ))
            .map_err(chart_err)?;
        chart
            .draw_series(
                series
                    .iter()
                    .map(|(&year, &value)| Circle::new((year, value), 4, PALETTE[0].filled())),
            )
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        Ok(())
    }

    fn pie_chart(&self, data: &IndexMap<String, f64>, title: &str, file: &str) -> Result<()> {
        // a pie can only show positive slices
        let slices: Vec<(&str, f64)> = data
            .iter()
            .filter(|&(_, &value)| value > 0.0)
            .map(|(key, &value)| (key.as_str(), value))
            .collect();
        if slices.is_empty() {
            return Ok(());
        }

        let path = self.dir.join(file);
        let root = BitMapBackend::new(&path, PIE_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;
        let root = root.titled(title, ("sans-serif", 22)).map_err(chart_err)?;

        let sizes: Vec<f64> = slices.iter().map(|(_, value)| *value).collect();
        let labels: Vec<String> = slices.iter().map(|(key, _)| (*key).to_string()).collect();
        let colors: Vec<RGBColor> = (0..slices.len())
            .map(|i| PALETTE[i % PALETTE.len()])
            .collect();

        let center = (PIE_SIZE.0 as i32 / 2, PIE_SIZE.1 as i32 / 2);
        let radius = f64::from(PIE_SIZE.0) * 0.35;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 18).into_font());
        pie.percentages(("sans-serif", 14).into_font());
        root.draw(&pie).map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        Ok(())
    }
}

fn chart_err<E: Display>(error: E) -> GdplensError {
    GdplensError::Chart(error.to_string())
}
