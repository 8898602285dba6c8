//! Data quality checks for vaccination tables.
//!
//! [`validate_quality`] is read-only and total: a table missing the expected
//! columns yields zero countries and no date bounds instead of an error.

mod quality;

pub use quality::{count_missing, validate_quality};
