//! Region-level aggregates over a year range.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::round2;
use crate::config::YearRange;
use crate::dataset::Dataset;

/// Arithmetic mean of values per region within the range, in region
/// encounter order.
pub fn average_by_region(dataset: &Dataset, range: YearRange) -> IndexMap<String, f64> {
    let mut sums: IndexMap<&str, (f64, usize)> = IndexMap::new();
    for record in dataset.iter().filter(|r| range.contains(r.year)) {
        let entry = sums.entry(record.region.as_str()).or_insert((0.0, 0));
        entry.0 += record.value;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(region, (sum, count))| (region.to_string(), round2(sum / count as f64)))
        .collect()
}

/// Total value per year within the range, keyed by year ascending.
pub fn global_trend(dataset: &Dataset, range: YearRange) -> BTreeMap<i32, f64> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for record in dataset.iter().filter(|r| range.contains(r.year)) {
        *totals.entry(record.year).or_insert(0.0) += record.value;
    }

    totals.values_mut().for_each(|v| *v = round2(*v));
    totals
}

/// Each region's share of the range total, as a percentage.
///
/// A zero total maps every region present to 0.0 instead of dividing.
pub fn region_contribution(dataset: &Dataset, range: YearRange) -> IndexMap<String, f64> {
    let mut sums: IndexMap<&str, f64> = IndexMap::new();
    let mut total = 0.0;
    for record in dataset.iter().filter(|r| range.contains(r.year)) {
        *sums.entry(record.region.as_str()).or_insert(0.0) += record.value;
        total += record.value;
    }

    sums.into_iter()
        .map(|(region, sum)| {
            let share = if total == 0.0 {
                0.0
            } else {
                round2(sum / total * 100.0)
            };
            (region.to_string(), share)
        })
        .collect()
}
