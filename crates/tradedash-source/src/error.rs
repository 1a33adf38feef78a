//! Error types for dataset origin resolution.
//!
//! Remote fetch failures are deliberately a separate type from resolver
//! errors: a [`FetchError`] is recovered inside the resolver (converted to a
//! failed resolution, never raised past it), while a [`SourceError`] is
//! surfaced to the caller.

use thiserror::Error;

use tradedash_core::DatasetError;

/// Result type for resolver operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors surfaced by the resolver to its caller.
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum SourceError {
    /// Uploaded bytes could not be parsed as CSV.
    #[error("Invalid uploaded CSV: {0}")]
    InvalidUpload(#[from] DatasetError),
}

/// Classified remote fetch failure.
///
/// Carried as data inside a failed resolution so the caller can decide
/// whether and how the reason is shown to the user.
#[derive(Error, Debug, Clone)]
#[allow(missing_docs)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {seconds}s: {url}")]
    Timeout {
        /// The requested URL.
        url: String,
        /// The configured timeout in seconds.
        seconds: u64,
    },

    /// The remote file does not exist (HTTP 404).
    #[error("Remote file not found: {url}")]
    NotFound {
        /// The requested URL.
        url: String,
    },

    /// Any other non-success HTTP status.
    #[error("HTTP status {status} for {url}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Connection or transport failure.
    #[error("Network error for {url}: {reason}")]
    Network {
        /// The requested URL.
        url: String,
        /// The underlying transport failure.
        reason: String,
    },

    /// The response body is not parseable CSV.
    #[error("Malformed CSV from {url}: {reason}")]
    Malformed {
        /// The requested URL.
        url: String,
        /// The underlying parse failure.
        reason: String,
    },
}
