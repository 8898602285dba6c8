//! Error types for table derivation.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while cleaning the raw table or deriving output tables.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column required for grouping is absent from the table.
    #[error("missing column '{column}' required for {operation}")]
    MissingColumn {
        column: String,
        operation: &'static str,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl TransformError {
    pub(crate) fn missing(column: &str, operation: &'static str) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
            operation,
        }
    }
}

impl From<PolarsError> for TransformError {
    fn from(err: PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
