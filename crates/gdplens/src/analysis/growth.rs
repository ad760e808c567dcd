//! Growth-rate analyses over a year range.

use indexmap::IndexMap;

use super::round2;
use crate::config::YearRange;
use crate::dataset::Dataset;

/// Per-country growth rate between the endpoint years of `range`.
///
/// A country must be present in the region at both endpoint years with a
/// positive start value; anything else is excluded rather than
/// zero-filled. The last row wins when a country has duplicates at an
/// endpoint year.
pub fn growth_rate(dataset: &Dataset, region: &str, range: YearRange) -> IndexMap<String, f64> {
    let mut start: IndexMap<&str, f64> = IndexMap::new();
    let mut end: IndexMap<&str, f64> = IndexMap::new();

    for record in dataset.iter().filter(|r| r.region == region) {
        if record.year == range.start {
            start.insert(record.country.as_str(), record.value);
        }
        if record.year == range.end {
            end.insert(record.country.as_str(), record.value);
        }
    }

    let mut rates = IndexMap::new();
    for (country, s) in &start {
        if *s <= 0.0 {
            continue;
        }
        let Some(e) = end.get(country) else {
            continue;
        };
        rates.insert((*country).to_string(), round2((e - s) / s * 100.0));
    }
    rates
}

/// Per-region growth between the endpoint years, and the fastest region.
///
/// Unlike [`growth_rate`], a region absent at an endpoint contributes a
/// sum of 0 there rather than being excluded, and a zero start sum
/// yields growth 0 rather than an exclusion or an infinity. The fastest
/// region is the first maximum in encounter order; `None` when no
/// regions fall inside the range.
pub fn fastest_region(
    dataset: &Dataset,
    range: YearRange,
) -> (Option<String>, IndexMap<String, f64>) {
    let mut sums: IndexMap<&str, (f64, f64)> = IndexMap::new();
    for record in dataset.iter().filter(|r| range.contains(r.year)) {
        let entry = sums.entry(record.region.as_str()).or_insert((0.0, 0.0));
        if record.year == range.start {
            entry.0 += record.value;
        }
        if record.year == range.end {
            entry.1 += record.value;
        }
    }

    let mut rates: IndexMap<String, f64> = IndexMap::new();
    for (region, (s, e)) in &sums {
        let growth = if *s == 0.0 {
            0.0
        } else {
            round2((e - s) / s * 100.0)
        };
        rates.insert((*region).to_string(), growth);
    }

    let mut fastest: Option<(&String, f64)> = None;
    for (region, &growth) in &rates {
        if fastest.is_none_or(|(_, best)| growth > best) {
            fastest = Some((region, growth));
        }
    }

    (fastest.map(|(region, _)| region.clone()), rates)
}
