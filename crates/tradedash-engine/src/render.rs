//! The render pass.
//!
//! One user interaction triggers one full top-to-bottom pass:
//! resolve the selected origin, apply the fallback policy, compute metrics.
//! Single-threaded and synchronous; nothing is shared across passes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tradedash_core::Dataset;
use tradedash_metrics::{summarize, MetricsError, PortfolioSummary};
use tradedash_source::{fallback_row, resolve, Origin, RemoteConfig, Resolution, SourceError};

/// Errors that abort a render pass.
///
/// Remote fetch failures never appear here; they are recovered by the
/// fallback policy inside [`render`].
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum RenderError {
    /// The resolver surfaced an error (e.g. a malformed upload).
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The resolved dataset violates a metrics precondition.
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// User-facing notice attached to a rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceNotice {
    /// The remote fetch failed or returned no rows; the illustrative
    /// fallback row was substituted.
    RemoteUnavailable {
        /// Why the remote data is unavailable.
        reason: String,
    },
}

/// A fully rendered view: the dataset, its summary, and any notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedView {
    /// The displayed dataset.
    pub dataset: Dataset,
    /// The three summary metrics.
    pub summary: PortfolioSummary,
    /// Warning to show alongside the data, if any.
    pub notice: Option<SourceNotice>,
}

/// Terminal outcome of one render pass.
#[derive(Debug)]
pub enum RenderOutcome {
    /// Upload origin with no file supplied yet; the pass halted before any
    /// dataset was produced.
    AwaitingUpload,
    /// The origin resolved cleanly but produced zero rows (empty upload or
    /// sample), so there is nothing to display or aggregate.
    NoData,
    /// Data and metrics ready for display.
    Rendered(RenderedView),
}

/// Runs one render pass for the selected origin.
///
/// Remote failures and empty remote datasets are recovered by substituting
/// the single illustrative fallback row and attaching a
/// [`SourceNotice::RemoteUnavailable`]; the pass itself only fails on a
/// malformed upload or a metrics precondition violation.
pub fn render(origin: &Origin, config: &RemoteConfig) -> Result<RenderOutcome, RenderError> {
    let origin_kind = match origin {
        Origin::Remote(file) => file.file_name(),
        Origin::Upload(_) => "upload",
        Origin::Sample => "sample",
    };
    tracing::debug!(origin = origin_kind, "starting render pass");
    let resolution = resolve(origin, config)?;

    let (dataset, notice) = match resolution {
        Resolution::AwaitingUpload => {
            tracing::debug!("awaiting upload; halting pass");
            return Ok(RenderOutcome::AwaitingUpload);
        }
        Resolution::RemoteFailed(error) => {
            tracing::debug!(%error, "applying fallback row");
            (
                fallback_row(),
                Some(SourceNotice::RemoteUnavailable {
                    reason: error.to_string(),
                }),
            )
        }
        Resolution::Resolved(dataset) if dataset.is_empty() => {
            if matches!(origin, Origin::Remote(_)) {
                tracing::debug!("remote dataset empty; applying fallback row");
                (
                    fallback_row(),
                    Some(SourceNotice::RemoteUnavailable {
                        reason: "remote file contains no rows".to_string(),
                    }),
                )
            } else {
                tracing::debug!("resolved dataset empty; nothing to display");
                return Ok(RenderOutcome::NoData);
            }
        }
        Resolution::Resolved(dataset) => (dataset, None),
    };

    let summary = summarize(&dataset)?;
    tracing::debug!(trades = summary.trade_count, "metrics computed");

    Ok(RenderOutcome::Rendered(RenderedView {
        dataset,
        summary,
        notice,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config() -> RemoteConfig {
        RemoteConfig::new("tester")
    }

    #[test]
    fn test_sample_origin_renders_metrics() {
        let outcome = render(&Origin::Sample, &config()).unwrap();
        match outcome {
            RenderOutcome::Rendered(view) => {
                assert_eq!(view.summary.trade_count, 3);
                assert_eq!(view.summary.total_quantity, dec!(225));
                assert_eq!(view.summary.total_investment_display(), "563,837.50");
                assert!(view.notice.is_none());
            }
            other => panic!("expected rendered view, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_upload_halts_cleanly() {
        let outcome = render(&Origin::Upload(None), &config()).unwrap();
        assert!(matches!(outcome, RenderOutcome::AwaitingUpload));
    }

    #[test]
    fn test_empty_upload_is_no_data() {
        let bytes = b"STRATEGY,ENTRY DATE,SCRIP,QTY,ENTRY PRICE\n".to_vec();
        let outcome = render(&Origin::Upload(Some(bytes)), &config()).unwrap();
        assert!(matches!(outcome, RenderOutcome::NoData));
    }

    #[test]
    fn test_upload_missing_column_is_typed_error() {
        let bytes = b"STRATEGY,SCRIP,QTY\nMomentum,RELIANCE.NS,100\n".to_vec();
        let err = render(&Origin::Upload(Some(bytes)), &config()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Metrics(MetricsError::MissingColumn { .. })
        ));
    }
}
