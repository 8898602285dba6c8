use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::debug;
use vax_common::{any_to_f64, column_dates, column_strings, is_float_dtype};
use vax_model::{COUNTRY_COLUMN, DATE_COLUMN, DateRange, QualityReport};

/// Builds the quality report for `df`.
pub fn validate_quality(df: &DataFrame) -> QualityReport {
    let missing_values: BTreeMap<String, usize> = df
        .get_columns()
        .iter()
        .map(|column| (column.name().to_string(), count_missing(column)))
        .collect();

    let unique_countries = column_strings(df, COUNTRY_COLUMN)
        .map(|countries| countries.into_iter().flatten().collect::<BTreeSet<_>>().len())
        .unwrap_or(0);

    let date_range = column_dates(df, DATE_COLUMN)
        .map(|dates| {
            let dated = dates.into_iter().flatten();
            DateRange {
                min_date: dated.clone().min(),
                max_date: dated.max(),
            }
        })
        .unwrap_or_default();

    let report = QualityReport {
        total_rows: df.height(),
        missing_values,
        date_range,
        unique_countries,
    };
    debug!(
        rows = report.total_rows,
        missing = report.total_missing(),
        countries = report.unique_countries,
        "quality report built"
    );
    report
}

/// Number of null cells in `column`, plus NaN cells for float columns.
pub fn count_missing(column: &Column) -> usize {
    if !is_float_dtype(column.dtype()) {
        return column.null_count();
    }
    (0..column.len())
        .filter(|&idx| {
            any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)).is_none_or(f64::is_nan)
        })
        .count()
}
