//! Per-country daily metrics.

use polars::prelude::DataFrame;
use vax_common::{column_dates, column_strings};
use vax_model::{COUNTRY_COLUMN, DATE_COLUMN, Metric};

use crate::error::Result;
use crate::rows::{cmp_nulls_last, take_rows};

/// Selects the key columns and the recognized metrics present in `df`.
///
/// Columns come out as `country`, `date`, then metrics in vocabulary order.
/// Absent columns are skipped. Rows are stable-sorted by `(country, date)`
/// ascending with nulls last.
pub fn create_country_metrics(df: &DataFrame) -> Result<DataFrame> {
    let present = |name: &&str| df.column(name).is_ok();
    let selection: Vec<&str> = [COUNTRY_COLUMN, DATE_COLUMN]
        .into_iter()
        .chain(Metric::ALL.iter().map(Metric::column_name))
        .filter(present)
        .collect();
    let selected = df.select(selection)?;

    let height = selected.height();
    let countries =
        column_strings(&selected, COUNTRY_COLUMN).unwrap_or_else(|| vec![None; height]);
    let dates = column_dates(&selected, DATE_COLUMN).unwrap_or_else(|| vec![None; height]);

    let mut order: Vec<usize> = (0..height).collect();
    order.sort_by(|&a, &b| {
        cmp_nulls_last(&countries[a], &countries[b])
            .then_with(|| cmp_nulls_last(&dates[a], &dates[b]))
    });
    take_rows(&selected, &order)
}
