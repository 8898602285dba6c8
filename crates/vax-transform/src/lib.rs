//! Vaccination table transformations.
//!
//! Turns the raw input table into the three derived tables:
//!
//! - [`clean_table`]: zero-fills numeric gaps and derives `vaccination_rate_pct`
//! - [`create_country_metrics`]: per-country daily metrics, sorted by `(country, date)`
//! - [`create_global_timeseries`]: worldwide daily totals, sourced or computed
//! - [`create_top_countries`]: latest row per country ranked by rate
//!
//! Every function reads its input and returns a new frame; the three
//! creators are independent of each other.

mod clean;
mod country;
mod error;
mod global;
mod ranking;
mod records;
mod rows;

pub use clean::{
    CleanedTable, RateDerivation, clean_table, derive_vaccination_rate, fill_numeric_nulls,
};
pub use country::create_country_metrics;
pub use error::{Result, TransformError};
pub use global::{GlobalSeries, create_global_timeseries};
pub use ranking::create_top_countries;
pub use records::metric_records;
