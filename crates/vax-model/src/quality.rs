//! Diagnostic summary of a loaded table.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Earliest and latest observation date.
///
/// Both bounds are `None` when the table has no `date` column or no dated row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

/// Row count, per-column missing counts, date span and country count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_rows: usize,
    /// Missing-value count keyed by column name, for every column.
    pub missing_values: BTreeMap<String, usize>,
    pub date_range: DateRange,
    /// Distinct non-missing countries; 0 when there is no `country` column.
    pub unique_countries: usize,
}

impl QualityReport {
    /// Total missing cells across all columns.
    pub fn total_missing(&self) -> usize {
        self.missing_values.values().sum()
    }

    /// Columns with at least one missing value, most missing first.
    pub fn incomplete_columns(&self) -> Vec<(&str, usize)> {
        let mut columns: Vec<(&str, usize)> = self
            .missing_values
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        columns.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QualityReport {
        QualityReport {
            total_rows: 4,
            missing_values: BTreeMap::from([
                ("country".to_string(), 0),
                ("daily_vaccinations".to_string(), 1),
                ("people_vaccinated".to_string(), 3),
            ]),
            date_range: DateRange {
                min_date: NaiveDate::from_ymd_opt(2021, 1, 1),
                max_date: NaiveDate::from_ymd_opt(2021, 3, 1),
            },
            unique_countries: 2,
        }
    }

    #[test]
    fn counts_missing_cells() {
        let report = sample();
        assert_eq!(report.total_missing(), 4);
        assert_eq!(
            report.incomplete_columns(),
            vec![("people_vaccinated", 3), ("daily_vaccinations", 1)]
        );
    }

    #[test]
    fn serializes_dates_as_iso_strings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date_range"]["min_date"], "2021-01-01");
        assert_eq!(json["date_range"]["max_date"], "2021-03-01");
        assert_eq!(json["unique_countries"], 2);
    }

    #[test]
    fn default_report_has_no_date_bounds() {
        let json = serde_json::to_value(QualityReport::default()).unwrap();
        assert!(json["date_range"]["min_date"].is_null());
        assert_eq!(json["total_rows"], 0);
    }
}
