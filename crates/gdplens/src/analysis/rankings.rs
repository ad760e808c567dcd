//! Point-in-time country rankings.

use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::dataset::Dataset;

const RANK_LIMIT: usize = 10;

/// Top 10 countries by value for a (region, year).
pub fn top_10(dataset: &Dataset, region: &str, year: i32) -> IndexMap<String, f64> {
    ranked(dataset, region, year, true)
}

/// Bottom 10 countries by value for a (region, year).
pub fn bottom_10(dataset: &Dataset, region: &str, year: i32) -> IndexMap<String, f64> {
    ranked(dataset, region, year, false)
}

// The sort is stable, so equal values keep input order; tie-breaking
// beyond that is unspecified. A country appearing twice in the first 10
// rows keeps its first position with the later value.
fn ranked(dataset: &Dataset, region: &str, year: i32, descending: bool) -> IndexMap<String, f64> {
    let mut matches: Vec<(&str, f64)> = dataset
        .iter()
        .filter(|r| r.region == region && r.year == year)
        .map(|r| (r.country.as_str(), r.value))
        .collect();

    matches.sort_by(|a, b| {
        let ord = a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
        if descending { ord.reverse() } else { ord }
    });

    let mut out = IndexMap::new();
    for (country, value) in matches.into_iter().take(RANK_LIMIT) {
        out.insert(country.to_string(), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::dataset;
    use crate::dataset::Dataset;

    fn twelve_countries() -> Dataset {
        let rows: Vec<(String, f64)> = (1..=12)
            .map(|i| (format!("C{i:02}"), (i * 10) as f64))
            .collect();
        Dataset::new(
            rows.into_iter()
                .map(|(country, value)| crate::dataset::Record {
                    country,
                    region: "Europe".to_string(),
                    year: 2015,
                    value,
                })
                .collect(),
        )
    }

    #[test]
    fn test_top_10_descending() {
        let top = top_10(&twelve_countries(), "Europe", 2015);

        assert_eq!(top.len(), 10);
        let values: Vec<f64> = top.values().copied().collect();
        assert_eq!(values[0], 120.0);
        assert_eq!(values[9], 30.0);
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_bottom_10_ascending() {
        let bottom = bottom_10(&twelve_countries(), "Europe", 2015);

        assert_eq!(bottom.len(), 10);
        let values: Vec<f64> = bottom.values().copied().collect();
        assert_eq!(values[0], 10.0);
        assert_eq!(values[9], 100.0);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_filters_region_and_year() {
        let data = dataset(&[
            ("USA", "North America", 2015, 100.0),
            ("FRA", "Europe", 2015, 90.0),
            ("USA", "North America", 2014, 500.0),
        ]);
        let top = top_10(&data, "North America", 2015);

        assert_eq!(top.len(), 1);
        assert_eq!(top.get("USA"), Some(&100.0));
    }

    #[test]
    fn test_fewer_than_ten() {
        let data = dataset(&[
            ("USA", "North America", 2015, 100.0),
            ("CAN", "North America", 2015, 50.0),
        ]);

        assert_eq!(top_10(&data, "North America", 2015).len(), 2);
        assert_eq!(top_10(&data, "Europe", 2015).len(), 0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let data = dataset(&[
            ("AAA", "Europe", 2015, 50.0),
            ("BBB", "Europe", 2015, 50.0),
            ("CCC", "Europe", 2015, 50.0),
        ]);
        let top = top_10(&data, "Europe", 2015);

        let countries: Vec<&str> = top.keys().map(String::as_str).collect();
        assert_eq!(countries, ["AAA", "BBB", "CCC"]);
    }
}
