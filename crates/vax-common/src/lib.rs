//! Shared utilities for the vaccination ETL crates.
//!
//! Polars `AnyValue` conversions used by every table-processing crate, and
//! the display formatter consumed by dashboards reading the derived tables.

pub mod format;
pub mod frame;

pub use format::{FormatMode, format_value};
pub use frame::{
    any_to_date, any_to_f64, any_to_i64, any_to_string, column_dates, column_f64, column_strings,
    days_to_date, is_float_dtype, is_numeric_dtype, parse_f64,
};
