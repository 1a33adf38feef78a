//! Remote file naming convention and bounded-timeout fetch.

use tradedash_core::{read_csv_bytes, Dataset};

use crate::config::RemoteConfig;
use crate::error::FetchError;

/// The named files expected at the remote base location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteFile {
    /// Short term strategy positions (`optimizer_st.csv`).
    ShortTermStrategy,
    /// Long term strategy positions (`optimizer_lt.csv`).
    LongTermStrategy,
    /// Sample portfolio (`sample_portfolio.csv`).
    SamplePortfolio,
}

impl RemoteFile {
    /// All named files, in display order.
    pub const ALL: [Self; 3] = [
        Self::ShortTermStrategy,
        Self::LongTermStrategy,
        Self::SamplePortfolio,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortTermStrategy => "Short Term Strategy",
            Self::LongTermStrategy => "Long Term Strategy",
            Self::SamplePortfolio => "Sample Portfolio",
        }
    }

    /// File name at the remote base location.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::ShortTermStrategy => "optimizer_st.csv",
            Self::LongTermStrategy => "optimizer_lt.csv",
            Self::SamplePortfolio => "sample_portfolio.csv",
        }
    }

    /// Parses a label or file name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.to_lowercase();
        Self::ALL.into_iter().find(|f| {
            lowered == f.label().to_lowercase() || lowered == f.file_name().to_lowercase()
        })
    }
}

impl std::fmt::Display for RemoteFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fetches one named remote file and parses it as a dataset.
pub fn fetch_remote(config: &RemoteConfig, file: RemoteFile) -> Result<Dataset, FetchError> {
    fetch_csv(config, &config.url_for(file))
}

/// Fetches an arbitrary URL and parses the body as a dataset.
///
/// The request carries the configured bounded timeout; failures are
/// classified so the caller can distinguish a missing file from a slow or
/// unreachable host.
pub fn fetch_csv(config: &RemoteConfig, url: &str) -> Result<Dataset, FetchError> {
    let timeout_secs = config.timeout.as_secs();
    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| classify(e, url, timeout_secs))?;

    tracing::debug!(url, timeout_secs, "fetching remote CSV");
    let response = client
        .get(url)
        .send()
        .map_err(|e| classify(e, url, timeout_secs))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound { url: url.into() });
    }
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.into(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .map_err(|e| classify(e, url, timeout_secs))?;

    read_csv_bytes(&body).map_err(|e| FetchError::Malformed {
        url: url.into(),
        reason: e.to_string(),
    })
}

fn classify(error: reqwest::Error, url: &str, timeout_secs: u64) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.into(),
            seconds: timeout_secs,
        }
    } else {
        FetchError::Network {
            url: url.into(),
            reason: error.to_string(),
        }
    }
}
