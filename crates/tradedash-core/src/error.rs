//! Error types for dataset operations.

use thiserror::Error;

/// Result type for core dataset operations.
pub type CoreResult<T> = Result<T, DatasetError>;

/// Errors that can occur while constructing or encoding a dataset.
#[derive(Error, Debug, Clone)]
#[allow(missing_docs)]
pub enum DatasetError {
    /// A row's cell count does not match the column count.
    #[error("Row {row} has {got} cells, expected {expected}")]
    RowWidthMismatch {
        /// Zero-based row index.
        row: usize,
        /// Cells found in the row.
        got: usize,
        /// Cells required by the column set.
        expected: usize,
    },

    /// CSV content could not be parsed.
    #[error("Malformed CSV: {reason}")]
    MalformedCsv {
        /// The underlying parse failure.
        reason: String,
    },

    /// CSV content could not be written.
    #[error("Failed to encode CSV: {reason}")]
    EncodeFailed {
        /// The underlying write failure.
        reason: String,
    },
}

impl DatasetError {
    /// Create a malformed-CSV error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedCsv {
            reason: reason.into(),
        }
    }

    /// Create an encode-failed error.
    #[must_use]
    pub fn encode_failed(reason: impl Into<String>) -> Self {
        Self::EncodeFailed {
            reason: reason.into(),
        }
    }
}
