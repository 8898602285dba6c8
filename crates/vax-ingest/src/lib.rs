//! Raw vaccination data ingestion.
//!
//! Locates the input CSV in a raw data directory, reads it into a Polars
//! DataFrame and converts the `date` column to calendar dates.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vax_ingest::load_raw_table;
//!
//! let table = load_raw_table(Path::new("data/raw"))?;
//! println!("{} rows from {}", table.record_count(), table.path().display());
//! ```

mod discovery;
mod error;
mod reader;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{
    InputSelection, SelectionReason, discover_input, is_preferred_input, list_csv_files,
    select_input_file,
};

// === CSV Reading ===
pub use reader::{normalize_date_column, parse_calendar_date, read_csv_table};

// === Loading ===
pub use table::{SourceTable, load_input_file, load_raw_table};
