//! Worldwide daily series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;
use vax_common::{
    any_to_i64, column_dates, column_f64, column_strings, is_float_dtype, is_numeric_dtype,
};
use vax_model::{CALCULATED_WORLD_LABEL, COUNTRY_COLUMN, DATE_COLUMN, SeriesSource, is_world_label};

use crate::error::{Result, TransformError};
use crate::rows::{cmp_nulls_last, take_rows};

const OPERATION: &str = "global time series";

/// The global series together with how it was produced.
#[derive(Debug, Clone)]
pub struct GlobalSeries {
    pub source: SeriesSource,
    pub data: DataFrame,
}

/// Builds one row per date of worldwide totals.
///
/// Rows whose country is `World` in any letter case are returned as they
/// are, stable-sorted by date. Without such rows, every numeric column is
/// summed per date (rows without a date are dropped) and the rows are
/// labelled `World (Calculated)`. Integer columns keep integer sums.
pub fn create_global_timeseries(df: &DataFrame) -> Result<GlobalSeries> {
    let countries = column_strings(df, COUNTRY_COLUMN)
        .ok_or_else(|| TransformError::missing(COUNTRY_COLUMN, OPERATION))?;
    let dates = column_dates(df, DATE_COLUMN)
        .ok_or_else(|| TransformError::missing(DATE_COLUMN, OPERATION))?;

    let mut world_rows: Vec<usize> = countries
        .iter()
        .enumerate()
        .filter(|(_, country)| country.as_deref().is_some_and(is_world_label))
        .map(|(idx, _)| idx)
        .collect();

    if !world_rows.is_empty() {
        world_rows.sort_by(|&a, &b| cmp_nulls_last(&dates[a], &dates[b]));
        debug!(rows = world_rows.len(), "using sourced world rows");
        return Ok(GlobalSeries {
            source: SeriesSource::Sourced,
            data: take_rows(df, &world_rows)?,
        });
    }

    let data = sum_by_date(df, &dates)?;
    debug!(dates = data.height(), "computed world totals");
    Ok(GlobalSeries {
        source: SeriesSource::Computed,
        data,
    })
}

fn sum_by_date(df: &DataFrame, dates: &[Option<NaiveDate>]) -> Result<DataFrame> {
    let mut groups: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    for (idx, date) in dates.iter().enumerate() {
        if let Some(date) = date {
            groups.entry(*date).or_default().push(idx);
        }
    }

    let group_dates: Vec<NaiveDate> = groups.keys().copied().collect();
    let mut columns: Vec<Column> = vec![Series::new(DATE_COLUMN.into(), group_dates).into_column()];

    for column in df.get_columns() {
        if !is_numeric_dtype(column.dtype()) {
            continue;
        }
        let name = column.name().as_str();
        let sums = if is_float_dtype(column.dtype()) {
            let values = column_f64(df, name).unwrap_or_default();
            let sums: Vec<f64> = groups
                .values()
                .map(|rows| {
                    rows.iter()
                        .filter_map(|&row| values.get(row).copied().flatten())
                        .filter(|v| !v.is_nan())
                        .fold(0.0, |acc, v| acc + v)
                })
                .collect();
            Series::new(name.into(), sums)
        } else {
            let sums: Vec<i64> = groups
                .values()
                .map(|rows| {
                    rows.iter()
                        .filter_map(|&row| any_to_i64(column.get(row).unwrap_or(AnyValue::Null)))
                        .fold(0_i64, i64::saturating_add)
                })
                .collect();
            Series::new(name.into(), sums)
        };
        columns.push(sums.into_column());
    }

    let label = SeriesSource::Computed
        .synthetic_label()
        .unwrap_or(CALCULATED_WORLD_LABEL);
    let labels = vec![label; groups.len()];
    columns.push(Series::new(COUNTRY_COLUMN.into(), labels).into_column());
    Ok(DataFrame::new(columns)?)
}
