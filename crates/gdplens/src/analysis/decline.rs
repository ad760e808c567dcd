//! Multi-year strict-decline detection.

use indexmap::IndexMap;

use crate::dataset::Dataset;

/// Countries in `region` whose value fell strictly in each step of the
/// last `window` years.
///
/// The window is the `window` consecutive years ending at the latest
/// year present for the region. A country qualifies only with exactly
/// one value for every window year; a missing or duplicated year
/// disqualifies it. The decline must be strict across the whole window,
/// not just the most recent step. Output order is country encounter
/// order, deterministic for identical input order.
pub fn declining_countries(dataset: &Dataset, region: &str, window: usize) -> Vec<String> {
    if window == 0 {
        return Vec::new();
    }

    let mut max_year: Option<i64> = None;
    for record in dataset.iter().filter(|r| r.region == region) {
        let year = i64::from(record.year);
        max_year = Some(max_year.map_or(year, |m| m.max(year)));
    }
    let Some(max_year) = max_year else {
        return Vec::new();
    };
    let first_year = max_year - window as i64 + 1;

    // Per country, one (value, hits) slot per window year. A single scan
    // fills the slots; the qualification check is then O(window) per
    // candidate.
    let mut per_country: IndexMap<&str, Vec<(f64, usize)>> = IndexMap::new();
    for record in dataset.iter().filter(|r| r.region == region) {
        let year = i64::from(record.year);
        if year < first_year || year > max_year {
            continue;
        }
        let slot = (year - first_year) as usize;
        let slots = per_country
            .entry(record.country.as_str())
            .or_insert_with(|| vec![(0.0, 0); window]);
        slots[slot] = (record.value, slots[slot].1 + 1);
    }

    per_country
        .into_iter()
        .filter(|(_, slots)| {
            slots.iter().all(|&(_, hits)| hits == 1)
                && slots.windows(2).all(|pair| pair[1].0 < pair[0].0)
        })
        .map(|(country, _)| country.to_string())
        .collect()
}
