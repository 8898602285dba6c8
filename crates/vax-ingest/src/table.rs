//! Loaded raw table with provenance.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use crate::discovery::{InputSelection, discover_input};
use crate::error::Result;
use crate::reader::{normalize_date_column, read_csv_table};

/// The raw input table and the file it was read from.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub selection: InputSelection,
    pub data: DataFrame,
}

impl SourceTable {
    pub fn path(&self) -> &Path {
        &self.selection.path
    }

    /// Returns the number of records in the table.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn into_data(self) -> DataFrame {
        self.data
    }
}

/// Discovers the input in `raw_dir` and loads it.
pub fn load_raw_table(raw_dir: &Path) -> Result<SourceTable> {
    let selection = discover_input(raw_dir)?;
    if selection.is_ambiguous() {
        warn!(
            raw_dir = %raw_dir.display(),
            candidates = selection.candidates,
            chosen = %selection.path.display(),
            "no preferred input file; using first listed file"
        );
    }
    load_selected(selection)
}

/// Loads an explicitly named input file, skipping discovery.
pub fn load_input_file(path: impl Into<PathBuf>) -> Result<SourceTable> {
    load_selected(InputSelection::explicit(path))
}

fn load_selected(selection: InputSelection) -> Result<SourceTable> {
    let mut data = read_csv_table(&selection.path)?;
    normalize_date_column(&mut data, &selection.path)?;
    debug!(
        path = %selection.path.display(),
        reason = ?selection.reason,
        rows = data.height(),
        columns = data.width(),
        "loaded raw table"
    );
    Ok(SourceTable { selection, data })
}
