//! The transformation engine: eight fixed analyses over a normalized
//! dataset.
//!
//! Every analysis is a pure function over `&Dataset` and never mutates
//! or errors; an empty filtered subset yields an empty mapping. The
//! [`analyze`] entry point always produces all eight results in fixed
//! order, or nothing at all.

pub mod decline;
pub mod growth;
pub mod rankings;
pub mod regional;

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::Query;
use crate::dataset::Dataset;

pub use decline::declining_countries;
pub use growth::{fastest_region, growth_rate};
pub use rankings::{bottom_10, top_10};
pub use regional::{average_by_region, global_trend, region_contribution};

/// The fixed set of analyses, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Top10,
    Bottom10,
    GrowthRate,
    AvgByContinent,
    GlobalTrend,
    FastestContinent,
    Declining,
    Contribution,
}

impl AnalysisKind {
    /// Stable type string used by sinks and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Top10 => "top10",
            AnalysisKind::Bottom10 => "bottom10",
            AnalysisKind::GrowthRate => "growth_rate",
            AnalysisKind::AvgByContinent => "avg_by_continent",
            AnalysisKind::GlobalTrend => "global_trend",
            AnalysisKind::FastestContinent => "fastest_continent",
            AnalysisKind::Declining => "declining",
            AnalysisKind::Contribution => "contribution",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of one analysis result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisData {
    /// Country- or region-keyed values, in rank or encounter order.
    Values(IndexMap<String, f64>),
    /// Year-keyed totals in ascending year order.
    Series(BTreeMap<i32, f64>),
    /// Per-region growth rates plus the fastest region.
    RegionGrowth {
        fastest: Option<String>,
        growth_rates: IndexMap<String, f64>,
    },
    /// Qualifying country names in encounter order.
    Countries(Vec<String>),
}

/// One labeled analysis result, produced fresh each run and handed to a
/// sink exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
    pub label: String,
    pub data: AnalysisData,
}

/// Run all eight analyses in fixed order.
pub fn analyze(dataset: &Dataset, query: &Query) -> Vec<Analysis> {
    let region = query.region.as_str();
    let year = query.year;
    let range = query.year_range;
    let (start, end) = (range.start, range.end);

    let (fastest, growth_rates) = growth::fastest_region(dataset, range);

    vec![
        Analysis {
            kind: AnalysisKind::Top10,
            label: format!("top 10 countries by gdp in {region} ({year})"),
            data: AnalysisData::Values(rankings::top_10(dataset, region, year)),
        },
        Analysis {
            kind: AnalysisKind::Bottom10,
            label: format!("bottom 10 countries by gdp in {region} ({year})"),
            data: AnalysisData::Values(rankings::bottom_10(dataset, region, year)),
        },
        Analysis {
            kind: AnalysisKind::GrowthRate,
            label: format!("gdp growth rate in {region} ({start}-{end})"),
            data: AnalysisData::Values(growth::growth_rate(dataset, region, range)),
        },
        Analysis {
            kind: AnalysisKind::AvgByContinent,
            label: format!("average gdp by continent ({start}-{end})"),
            data: AnalysisData::Values(regional::average_by_region(dataset, range)),
        },
        Analysis {
            kind: AnalysisKind::GlobalTrend,
            label: format!("total global gdp trend ({start}-{end})"),
            data: AnalysisData::Series(regional::global_trend(dataset, range)),
        },
        Analysis {
            kind: AnalysisKind::FastestContinent,
            label: format!("fastest growing continent ({start}-{end})"),
            data: AnalysisData::RegionGrowth {
                fastest,
                growth_rates,
            },
        },
        Analysis {
            kind: AnalysisKind::Declining,
            label: format!(
                "countries with consistent gdp decline (last {} years)",
                query.decline_years
            ),
            data: AnalysisData::Countries(decline::declining_countries(
                dataset,
                region,
                query.decline_years,
            )),
        },
        Analysis {
            kind: AnalysisKind::Contribution,
            label: format!("continent contribution to global gdp ({start}-{end})"),
            data: AnalysisData::Values(regional::region_contribution(dataset, range)),
        },
    ]
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::dataset::{Dataset, Record};

    /// Shorthand record constructor for engine tests.
    pub fn record(country: &str, region: &str, year: i32, value: f64) -> Record {
        Record {
            country: country.to_string(),
            region: region.to_string(),
            year,
            value,
        }
    }

    pub fn dataset(records: &[(&str, &str, i32, f64)]) -> Dataset {
        Dataset::new(
            records
                .iter()
                .map(|&(country, region, year, value)| record(country, region, year, value))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::dataset;
    use super::*;
    use crate::config::YearRange;

    fn query() -> Query {
        Query {
            region: "North America".to_string(),
            year: 2010,
            year_range: YearRange {
                start: 2010,
                end: 2020,
            },
            decline_years: 3,
        }
    }

    #[test]
    fn test_always_eight_results_in_fixed_order() {
        let expected = [
            AnalysisKind::Top10,
            AnalysisKind::Bottom10,
            AnalysisKind::GrowthRate,
            AnalysisKind::AvgByContinent,
            AnalysisKind::GlobalTrend,
            AnalysisKind::FastestContinent,
            AnalysisKind::Declining,
            AnalysisKind::Contribution,
        ];

        for data in [
            dataset(&[]),
            dataset(&[("USA", "North America", 2010, 100.0)]),
        ] {
            let results = analyze(&data, &query());
            assert_eq!(results.len(), 8);
            let kinds: Vec<_> = results.iter().map(|r| r.kind).collect();
            assert_eq!(kinds, expected);
        }
    }

    #[test]
    fn test_empty_dataset_yields_empty_payloads() {
        let results = analyze(&dataset(&[]), &query());

        assert_eq!(results[0].data, AnalysisData::Values(Default::default()));
        assert_eq!(results[4].data, AnalysisData::Series(Default::default()));
        assert_eq!(
            results[5].data,
            AnalysisData::RegionGrowth {
                fastest: None,
                growth_rates: Default::default()
            }
        );
        assert_eq!(results[6].data, AnalysisData::Countries(Vec::new()));
    }

    #[test]
    fn test_end_to_end_example() {
        let data = dataset(&[
            ("USA", "North America", 2010, 100.0),
            ("USA", "North America", 2020, 150.0),
            ("CAN", "North America", 2010, 50.0),
            ("CAN", "North America", 2020, 40.0),
        ]);
        let results = analyze(&data, &query());

        let AnalysisData::Values(rates) = &results[2].data else {
            panic!("growth_rate payload");
        };
        assert_eq!(rates.get("USA"), Some(&50.0));
        assert_eq!(rates.get("CAN"), Some(&-20.0));

        let AnalysisData::Series(trend) = &results[4].data else {
            panic!("global_trend payload");
        };
        assert_eq!(trend.get(&2010), Some(&150.0));
        assert_eq!(trend.get(&2020), Some(&190.0));
    }

    #[test]
    fn test_labels_carry_query_parameters() {
        let results = analyze(&dataset(&[]), &query());

        assert_eq!(
            results[0].label,
            "top 10 countries by gdp in North America (2010)"
        );
        assert_eq!(results[2].label, "gdp growth rate in North America (2010-2020)");
        assert_eq!(
            results[6].label,
            "countries with consistent gdp decline (last 3 years)"
        );
    }

    #[test]
    fn test_kind_type_strings() {
        assert_eq!(AnalysisKind::Top10.as_str(), "top10");
        assert_eq!(AnalysisKind::GrowthRate.as_str(), "growth_rate");
        assert_eq!(AnalysisKind::AvgByContinent.as_str(), "avg_by_continent");
        assert_eq!(AnalysisKind::FastestContinent.as_str(), "fastest_continent");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005), 1.0);
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(-20.0), -20.0);
        assert_eq!(round2(66.666666), 66.67);
    }
}
