//! All-or-nothing output of the derived tables.
//!
//! Every table is first written to a hidden temporary file in the output
//! directory. Only when all of them are on disk are they renamed over the
//! final names; on any failure the temporaries are removed and the existing
//! outputs are left untouched.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::{debug, info, warn};
use vax_model::OutputTable;

use crate::csv::write_csv_table;
use crate::error::{OutputError, Result};

/// A table that was committed to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub table: OutputTable,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Final path of `table` inside `out_dir`.
pub fn output_path(out_dir: &Path, table: OutputTable) -> PathBuf {
    out_dir.join(table.file_name())
}

fn staging_path(out_dir: &Path, table: OutputTable) -> PathBuf {
    out_dir.join(format!(".{}.tmp", table.file_name()))
}

/// Writes every table to `out_dir`, creating the directory if needed.
pub fn write_tables(
    out_dir: &Path,
    tables: &[(OutputTable, &DataFrame)],
) -> Result<Vec<WrittenTable>> {
    fs::create_dir_all(out_dir).map_err(|source| OutputError::Io {
        operation: "create directory",
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut staged: Vec<PathBuf> = Vec::with_capacity(tables.len());
    for (table, df) in tables {
        let temp_path = staging_path(out_dir, *table);
        staged.push(temp_path.clone());
        if let Err(err) = write_csv_table(df, &temp_path) {
            discard_staged(&staged);
            return Err(err);
        }
        debug!(table = %table, path = %temp_path.display(), "staged output table");
    }

    let mut written = Vec::with_capacity(tables.len());
    for (idx, (table, df)) in tables.iter().enumerate() {
        let temp_path = &staged[idx];
        let target_path = output_path(out_dir, *table);
        if let Err(source) = fs::rename(temp_path, &target_path) {
            discard_staged(&staged[idx..]);
            return Err(OutputError::AtomicWriteFailed {
                temp_path: temp_path.clone(),
                target_path,
                source,
            });
        }
        info!(
            table = %table,
            path = %target_path.display(),
            rows = df.height(),
            "wrote output table"
        );
        written.push(WrittenTable {
            table: *table,
            path: target_path,
            rows: df.height(),
            columns: df.width(),
        });
    }
    Ok(written)
}

fn discard_staged(paths: &[PathBuf]) {
    for path in paths {
        if let Err(err) = fs::remove_file(path)
            && err.kind() != std::io::ErrorKind::NotFound
        {
            warn!(path = %path.display(), error = %err, "failed to remove staged file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};
    use tempfile::tempdir;

    fn small() -> DataFrame {
        DataFrame::new(vec![
            Series::new("country".into(), vec!["Chile"]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn staging_files_are_hidden() {
        let path = staging_path(Path::new("out"), OutputTable::GlobalTimeSeries);
        assert_eq!(path, Path::new("out").join(".global_time_series.csv.tmp"));
    }

    #[test]
    fn leaves_no_staging_files_behind() {
        let dir = tempdir().unwrap();
        let df = small();
        write_tables(dir.path(), &[(OutputTable::TopCountriesLatest, &df)]).unwrap();
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["top_countries_latest.csv".to_string()]);
    }

    #[test]
    fn failed_rename_removes_staged_files() {
        let dir = tempdir().unwrap();
        // A directory at the target name makes the rename fail.
        fs::create_dir(dir.path().join("global_time_series.csv")).unwrap();
        fs::write(dir.path().join("global_time_series.csv").join("keep"), "x").unwrap();
        let df = small();
        let result = write_tables(
            dir.path(),
            &[
                (OutputTable::GlobalTimeSeries, &df),
                (OutputTable::TopCountriesLatest, &df),
            ],
        );
        assert!(matches!(result, Err(OutputError::AtomicWriteFailed { .. })));
        assert!(!staging_path(dir.path(), OutputTable::GlobalTimeSeries).exists());
        assert!(!staging_path(dir.path(), OutputTable::TopCountriesLatest).exists());
        assert!(!output_path(dir.path(), OutputTable::TopCountriesLatest).exists());
    }
}
