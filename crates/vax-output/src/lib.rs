//! Output of the derived vaccination tables.
//!
//! Tables are written as headed CSV with ISO dates under fixed file names,
//! committed together through [`write_tables`].

mod commit;
mod csv;
mod error;

pub use commit::{WrittenTable, output_path, write_tables};
pub use csv::write_csv_table;
pub use error::{OutputError, Result};
