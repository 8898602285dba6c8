//! Latest-observation ranking of countries.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::NaiveDate;
use polars::prelude::DataFrame;
use tracing::debug;
use vax_common::{column_dates, column_f64, column_strings};
use vax_model::{COUNTRY_COLUMN, DATE_COLUMN, Metric, TOP_COUNTRIES_LIMIT, is_aggregate_label};

use crate::error::{Result, TransformError};
use crate::rows::{cmp_desc_nan_last, take_rows};

const OPERATION: &str = "top countries";

/// Picks each country's most recent row and ranks them by vaccination rate.
///
/// When a country has several rows on its latest date, the earliest row in
/// the input wins. Rows without a country are ignored and countries without
/// any dated row are dropped. Aggregate labels are excluded by exact match.
/// Rows are ordered by country, then stable-sorted by the first available
/// rate column descending (NaN and null last), then cut to the top 20.
pub fn create_top_countries(df: &DataFrame) -> Result<DataFrame> {
    let countries = column_strings(df, COUNTRY_COLUMN)
        .ok_or_else(|| TransformError::missing(COUNTRY_COLUMN, OPERATION))?;
    let dates = column_dates(df, DATE_COLUMN)
        .ok_or_else(|| TransformError::missing(DATE_COLUMN, OPERATION))?;

    let latest = latest_rows(&countries, &dates);
    let mut rows: Vec<usize> = latest
        .into_iter()
        .filter(|(country, _)| !is_aggregate_label(country))
        .map(|(_, row)| row)
        .collect();

    let rate_column = Metric::rate_sources()
        .into_iter()
        .find_map(|metric| column_f64(df, metric.column_name()).map(|values| (metric, values)));
    if let Some((metric, rates)) = &rate_column {
        rows.sort_by(|&a, &b| cmp_desc_nan_last(rates[a], rates[b]));
        debug!(rate = %metric, countries = rows.len(), "ranked countries by rate");
    }

    rows.truncate(TOP_COUNTRIES_LIMIT);
    take_rows(df, &rows)
}

/// Row index of each country's latest dated row, keyed in ascending country order.
fn latest_rows<'a>(
    countries: &'a [Option<String>],
    dates: &[Option<NaiveDate>],
) -> BTreeMap<&'a str, usize> {
    let mut latest: BTreeMap<&str, (NaiveDate, usize)> = BTreeMap::new();
    for (row, (country, date)) in countries.iter().zip(dates).enumerate() {
        let (Some(country), Some(date)) = (country.as_deref(), *date) else {
            continue;
        };
        match latest.entry(country) {
            Entry::Vacant(entry) => {
                entry.insert((date, row));
            }
            Entry::Occupied(mut entry) => {
                if date > entry.get().0 {
                    entry.insert((date, row));
                }
            }
        }
    }
    latest
        .into_iter()
        .map(|(country, (_, row))| (country, row))
        .collect()
}
