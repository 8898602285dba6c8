//! Typed row views over derived tables.

use polars::prelude::DataFrame;
use vax_common::{column_dates, column_f64, column_strings};
use vax_model::{COUNTRY_COLUMN, DATE_COLUMN, Metric, MetricRecord};

/// Reads every row of `df` into a [`MetricRecord`].
///
/// Only recognized metric columns are read; null metric values are left out
/// of the record's map.
pub fn metric_records(df: &DataFrame) -> Vec<MetricRecord> {
    let height = df.height();
    let countries = column_strings(df, COUNTRY_COLUMN).unwrap_or_else(|| vec![None; height]);
    let dates = column_dates(df, DATE_COLUMN).unwrap_or_else(|| vec![None; height]);
    let metrics: Vec<(Metric, Vec<Option<f64>>)> = Metric::ALL
        .into_iter()
        .filter_map(|metric| column_f64(df, metric.column_name()).map(|values| (metric, values)))
        .collect();

    countries
        .into_iter()
        .zip(dates)
        .enumerate()
        .map(|(row, (country, date))| {
            let mut record = MetricRecord {
                country,
                date,
                ..MetricRecord::default()
            };
            for (metric, values) in &metrics {
                if let Some(value) = values.get(row).copied().flatten() {
                    record.metrics.insert(*metric, value);
                }
            }
            record
        })
        .collect()
}
