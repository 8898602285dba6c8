//! CSV serialization of a single table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use crate::error::{OutputError, Result};

/// Writes `df` to `path` as CSV with a header row and no index column.
///
/// Dates are rendered as `YYYY-MM-DD`. The file is flushed and synced
/// before returning.
pub fn write_csv_table(df: &DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let mut table = df.clone();
    CsvWriter::new(&mut writer)
        .include_header(true)
        .finish(&mut table)
        .map_err(|err| OutputError::CsvWrite {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    writer.flush().map_err(|source| OutputError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source,
    })?;
    writer.get_ref().sync_all().map_err(|source| OutputError::Io {
        operation: "sync",
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
