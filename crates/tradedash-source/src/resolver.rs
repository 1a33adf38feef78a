//! Origin selection and dataset resolution.

use tradedash_core::{read_csv_bytes, Dataset};

use crate::config::RemoteConfig;
use crate::error::{FetchError, SourceResult};
use crate::remote::{fetch_remote, RemoteFile};
use crate::sample::sample_portfolio;

/// One of the three mutually exclusive dataset origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A named file in the remote repository.
    Remote(RemoteFile),
    /// User-supplied CSV bytes; `None` means no file has been supplied yet.
    Upload(Option<Vec<u8>>),
    /// The built-in three-row sample portfolio.
    Sample,
}

/// Outcome of resolving one origin.
#[derive(Debug)]
pub enum Resolution {
    /// A dataset was produced (possibly with zero rows).
    Resolved(Dataset),
    /// The remote fetch failed; the reason is carried for the caller to
    /// surface or discard. Recovery policy (fallback data, error banner)
    /// belongs to the caller.
    RemoteFailed(FetchError),
    /// Upload origin with no file supplied yet. A neutral halt, not a
    /// failure.
    AwaitingUpload,
}

/// Resolves a dataset from the selected origin.
///
/// Remote fetch failures never raise past this function: they come back as
/// [`Resolution::RemoteFailed`]. A malformed *upload* is the one surfaced
/// error, since silently mis-parsing user data could produce wrong metrics.
pub fn resolve(origin: &Origin, config: &RemoteConfig) -> SourceResult<Resolution> {
    match origin {
        Origin::Remote(file) => match fetch_remote(config, *file) {
            Ok(dataset) => {
                tracing::debug!(file = %file, rows = dataset.row_count(), "remote fetch resolved");
                Ok(Resolution::Resolved(dataset))
            }
            Err(error) => {
                tracing::warn!(file = %file, %error, "remote fetch failed");
                Ok(Resolution::RemoteFailed(error))
            }
        },
        Origin::Upload(None) => Ok(Resolution::AwaitingUpload),
        Origin::Upload(Some(bytes)) => {
            let dataset = read_csv_bytes(bytes)?;
            tracing::debug!(rows = dataset.row_count(), "uploaded CSV resolved");
            Ok(Resolution::Resolved(dataset))
        }
        Origin::Sample => Ok(Resolution::Resolved(sample_portfolio())),
    }
}
