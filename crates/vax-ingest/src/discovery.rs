//! Input file discovery for the raw data directory.

use std::path::{Path, PathBuf};

use vax_model::{PREFERRED_INPUT_EXCLUDE, PREFERRED_INPUT_MARKER};

use crate::error::{IngestError, Result};

/// How the input file was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// Named by the caller; discovery was skipped.
    Explicit,
    /// File name marks it as the per-country vaccinations table.
    Preferred,
    /// No preferred file; the first listed file was taken.
    Fallback,
}

/// The file a run will load, with the alternatives it was chosen from.
#[derive(Debug, Clone)]
pub struct InputSelection {
    pub path: PathBuf,
    pub reason: SelectionReason,
    /// Number of CSV files that were eligible.
    pub candidates: usize,
}

impl InputSelection {
    /// Selection for a file named explicitly by the caller.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            reason: SelectionReason::Explicit,
            candidates: 1,
        }
    }

    /// True when the choice depended on directory-listing order.
    pub fn is_ambiguous(&self) -> bool {
        self.reason == SelectionReason::Fallback && self.candidates > 1
    }
}

/// Lists all CSV files in a directory.
///
/// Files are returned in directory-listing order, which is platform and
/// filesystem dependent.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        // Check for .csv extension (case-insensitive)
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    Ok(files)
}

/// Returns true if the file name marks the main per-country table.
pub fn is_preferred_input(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    name.contains(PREFERRED_INPUT_MARKER) && !name.contains(PREFERRED_INPUT_EXCLUDE)
}

/// Picks the input among `files`, keeping their order for ties.
///
/// The first preferred file wins; otherwise the first file. Returns `None`
/// for an empty list.
pub fn select_input_file(files: &[PathBuf]) -> Option<InputSelection> {
    let candidates = files.len();
    if let Some(path) = files.iter().find(|path| is_preferred_input(path)) {
        return Some(InputSelection {
            path: path.clone(),
            reason: SelectionReason::Preferred,
            candidates,
        });
    }
    files.first().map(|path| InputSelection {
        path: path.clone(),
        reason: SelectionReason::Fallback,
        candidates,
    })
}

/// Lists `dir` and selects the input file.
///
/// Fails with [`IngestError::NoInputData`] when the directory does not exist
/// or holds no CSV.
pub fn discover_input(dir: &Path) -> Result<InputSelection> {
    if !dir.exists() {
        return Err(IngestError::NoInputData {
            dir: dir.to_path_buf(),
        });
    }
    let files = list_csv_files(dir)?;
    select_input_file(&files).ok_or_else(|| IngestError::NoInputData {
        dir: dir.to_path_buf(),
    })
}
