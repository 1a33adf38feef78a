//! Error types for metrics computation.

use thiserror::Error;

/// Result type for metrics operations.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Precondition violations detected before aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum MetricsError {
    /// The dataset has zero rows.
    #[error("Dataset has no rows")]
    EmptyDataset,

    /// A required column is absent.
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// The absent column name.
        column: String,
    },

    /// A required column holds a non-numeric or blank value.
    #[error("Non-numeric value in column '{column}' at row {row}")]
    NonNumericValue {
        /// The offending column name.
        column: String,
        /// Zero-based row index.
        row: usize,
    },
}

impl MetricsError {
    /// Create a missing-column error.
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a non-numeric-value error.
    #[must_use]
    pub fn non_numeric(column: impl Into<String>, row: usize) -> Self {
        Self::NonNumericValue {
            column: column.into(),
            row,
        }
    }
}
