//! Canonical record model and the normalizer.

use serde::Serialize;

use crate::input::RawRow;

/// One (country, region, year) GDP observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub country: String,
    pub region: String,
    pub year: i32,
    pub value: f64,
}

/// Ordered collection of records, immutable after construction.
///
/// Duplicates on (country, year) are legal; grouping analyses aggregate
/// them rather than deduplicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Basic shape of the dataset: record count and observed year span.
    pub fn summary(&self) -> DatasetSummary {
        let year_span = self
            .records
            .iter()
            .map(|r| (r.year, r.year))
            .reduce(|(lo, hi), (y, _)| (lo.min(y), hi.max(y)));

        DatasetSummary {
            records: self.records.len(),
            year_span,
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Record count and year span of a normalized dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub year_span: Option<(i32, i32)>,
}

/// Coerce raw rows into the canonical record shape, dropping unusable rows.
///
/// Year and value are coerced to numeric; rows where either is missing or
/// non-coercible are dropped, never defaulted. Rows without a country or
/// region are dropped too since both are required keys. Surviving years
/// are truncated toward zero to an integer. Order-preserving and
/// deterministic for a given input sequence.
pub fn normalize(rows: &[RawRow]) -> Dataset {
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(country) = non_empty(row.country.as_deref()) else {
            continue;
        };
        let Some(region) = non_empty(row.region.as_deref()) else {
            continue;
        };
        let Some(year) = row.year.as_deref().and_then(parse_numeric) else {
            continue;
        };
        let Some(value) = row.value.as_deref().and_then(parse_numeric) else {
            continue;
        };

        records.push(Record {
            country: country.to_string(),
            region: region.to_string(),
            year: year as i32,
            value,
        });
    }

    Dataset::new(records)
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a numeric field; non-finite values count as missing.
fn parse_numeric(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(country: &str, region: &str, year: &str, value: &str) -> RawRow {
        RawRow {
            country: Some(country.to_string()),
            region: Some(region.to_string()),
            year: Some(year.to_string()),
            value: Some(value.to_string()),
        }
    }

    #[test]
    fn test_normalize_clean_rows() {
        let rows = vec![
            raw("USA", "North America", "2010", "100.5"),
            raw("CAN", "North America", "2011", "50"),
        ];
        let dataset = normalize(&rows);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].year, 2010);
        assert_eq!(dataset.records()[0].value, 100.5);
        assert_eq!(dataset.records()[1].country, "CAN");
    }

    #[test]
    fn test_normalize_drops_non_numeric() {
        let rows = vec![
            raw("USA", "North America", "not-a-year", "100"),
            raw("CAN", "North America", "2011", "abc"),
            raw("MEX", "North America", "2012", "75"),
        ];
        let dataset = normalize(&rows);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].country, "MEX");
    }

    #[test]
    fn test_normalize_drops_missing_fields() {
        let rows = vec![
            RawRow {
                country: None,
                region: Some("Europe".to_string()),
                year: Some("2010".to_string()),
                value: Some("1.0".to_string()),
            },
            RawRow {
                country: Some("FRA".to_string()),
                region: Some("Europe".to_string()),
                year: Some("2010".to_string()),
                value: None,
            },
        ];
        assert!(normalize(&rows).is_empty());
    }

    #[test]
    fn test_normalize_truncates_year() {
        let rows = vec![raw("USA", "North America", "2010.9", "100")];
        let dataset = normalize(&rows);

        assert_eq!(dataset.records()[0].year, 2010);
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        let rows = vec![
            raw("USA", "North America", "2010", "NaN"),
            raw("CAN", "North America", "inf", "50"),
        ];
        assert!(normalize(&rows).is_empty());
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let rows = vec![
            raw("USA", "North America", "2010", "100"),
            raw("??", "??", "??", "??"),
            raw("CAN", "North America", "2011", "50"),
        ];
        assert_eq!(normalize(&rows), normalize(&rows));
    }

    #[test]
    fn test_summary() {
        let rows = vec![
            raw("USA", "North America", "2010", "100"),
            raw("CAN", "North America", "2020", "50"),
            raw("MEX", "North America", "2015", "25"),
        ];
        let summary = normalize(&rows).summary();

        assert_eq!(summary.records, 3);
        assert_eq!(summary.year_span, Some((2010, 2020)));
    }

    #[test]
    fn test_summary_empty() {
        let summary = Dataset::default().summary();
        assert_eq!(summary.records, 0);
        assert_eq!(summary.year_span, None);
    }
}
