//! CSV loading and date normalization.

use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, DataType, NamedFrom, SerReader, Series};
use vax_common::any_to_string;
use vax_model::DATE_COLUMN;

use crate::error::{IngestError, Result};

/// Date-only formats accepted in the `date` column, tried in order.
const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d", // ISO: 2021-01-15
    "%Y/%m/%d", // 2021/01/15
    "%m/%d/%Y", // US: 01/15/2021
    "%d.%m.%Y", // 15.01.2021
    "%Y%m%d",   // Compact: 20210115
];

/// Reads a CSV file with a header row into a DataFrame.
///
/// Column types are inferred from every row. No row-level validation happens
/// here; malformed values surface later or not at all.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(df)
}

/// Parses a calendar date, ignoring any trailing time-of-day part.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Some(date) = try_parse_date(trimmed) {
        return Some(date);
    }
    // "2021-01-15T00:00:00" or "2021-01-15 00:00:00"
    let (head, tail) = trimmed.split_at_checked(10)?;
    if tail.starts_with('T') || tail.starts_with(' ') {
        return NaiveDate::parse_from_str(head, "%Y-%m-%d").ok();
    }
    None
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Converts the `date` column, if present, to a polars `Date` column.
///
/// Empty cells become null. Any other unparseable value is a
/// [`IngestError::DataFormat`] naming its data row.
pub fn normalize_date_column(df: &mut DataFrame, path: &Path) -> Result<()> {
    let Ok(column) = df.column(DATE_COLUMN) else {
        return Ok(());
    };
    if matches!(column.dtype(), DataType::Date) {
        return Ok(());
    }

    let mut dates: Vec<Option<NaiveDate>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let raw = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        let text = raw.as_deref().map(str::trim).unwrap_or_default();
        if text.is_empty() {
            dates.push(None);
            continue;
        }
        let date = parse_calendar_date(text).ok_or_else(|| IngestError::DataFormat {
            path: path.to_path_buf(),
            column: DATE_COLUMN.to_string(),
            row: idx + 1,
            value: text.to_string(),
        })?;
        dates.push(Some(date));
    }

    df.with_column(Series::new(DATE_COLUMN.into(), dates))?;
    Ok(())
}
