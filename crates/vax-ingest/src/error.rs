//! Error types for raw data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating and loading the raw input.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// The raw directory holds no CSV file.
    #[error("no input data: no CSV files found in {dir}")]
    NoInputData { dir: PathBuf },

    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Explicitly requested input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    // === Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// A value could not be converted to the column's expected type.
    #[error("invalid {column} value '{value}' in {path} (data row {row})")]
    DataFormat {
        path: PathBuf,
        column: String,
        /// 1-based data row, header excluded.
        row: usize,
        value: String,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
