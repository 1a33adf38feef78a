//! Remote repository configuration.
//!
//! The account identifier and repository coordinates are injected at startup
//! (programmatically or from `TRADEDASH_*` environment variables) rather than
//! living in a module-level constant, so tests can substitute fixtures via
//! [`RemoteConfig::with_base_url`].

use std::time::Duration;

/// Default repository name.
pub const DEFAULT_REPOSITORY: &str = "trading-strategy-dashboard";

/// Default branch.
pub const DEFAULT_BRANCH: &str = "main";

/// Default fetch timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable naming the repository account/user.
pub const ENV_USER: &str = "TRADEDASH_GITHUB_USER";

/// Environment variable overriding the repository name.
pub const ENV_REPOSITORY: &str = "TRADEDASH_GITHUB_REPO";

/// Environment variable overriding the branch.
pub const ENV_BRANCH: &str = "TRADEDASH_GITHUB_BRANCH";

/// Environment variable overriding the fetch timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "TRADEDASH_FETCH_TIMEOUT_SECS";

/// Remote repository coordinates and fetch settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Repository account/user name.
    pub username: String,

    /// Repository name.
    pub repository: String,

    /// Branch the raw files are served from.
    pub branch: String,

    /// Bounded timeout applied to every fetch.
    pub timeout: Duration,

    /// Base URL override; when set, repository coordinates are ignored.
    base_url: Option<String>,
}

impl RemoteConfig {
    /// Creates a configuration for the given account with default
    /// repository, branch, and timeout.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            repository: DEFAULT_REPOSITORY.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
        }
    }

    /// Builds a configuration from `TRADEDASH_*` environment variables.
    ///
    /// Returns `None` when [`ENV_USER`] is unset; the remaining variables
    /// fall back to defaults.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let username = std::env::var(ENV_USER).ok()?;
        let mut config = Self::new(username);
        if let Ok(repo) = std::env::var(ENV_REPOSITORY) {
            config.repository = repo;
        }
        if let Ok(branch) = std::env::var(ENV_BRANCH) {
            config.branch = branch;
        }
        if let Some(secs) = std::env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Some(config)
    }

    /// Sets the repository name.
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    /// Sets the branch.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Sets the fetch timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the base URL entirely (test fixtures, mirrors).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The base location the named files are fetched from, with a trailing
    /// slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) if url.ends_with('/') => url.clone(),
            Some(url) => format!("{}/", url),
            None => format!(
                "https://raw.githubusercontent.com/{}/{}/{}/",
                self.username, self.repository, self.branch
            ),
        }
    }

    /// Full URL of one named remote file.
    #[must_use]
    pub fn url_for(&self, file: crate::RemoteFile) -> String {
        format!("{}{}", self.base_url(), file.file_name())
    }

    /// Repository page URL, for user-facing setup messages.
    #[must_use]
    pub fn repository_url(&self) -> String {
        format!("https://github.com/{}/{}", self.username, self.repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RemoteFile;

    #[test]
    fn test_default_base_url() {
        let config = RemoteConfig::new("trader");
        assert_eq!(
            config.base_url(),
            "https://raw.githubusercontent.com/trader/trading-strategy-dashboard/main/"
        );
        assert_eq!(
            config.url_for(RemoteFile::ShortTermStrategy),
            "https://raw.githubusercontent.com/trader/trading-strategy-dashboard/main/optimizer_st.csv"
        );
    }

    #[test]
    fn test_coordinate_overrides() {
        let config = RemoteConfig::new("trader")
            .with_repository("my-dash")
            .with_branch("develop");
        assert_eq!(
            config.url_for(RemoteFile::SamplePortfolio),
            "https://raw.githubusercontent.com/trader/my-dash/develop/sample_portfolio.csv"
        );
        assert_eq!(config.repository_url(), "https://github.com/trader/my-dash");
    }

    #[test]
    fn test_from_env() {
        // No other test in this crate touches these variables.
        std::env::remove_var(ENV_USER);
        assert!(RemoteConfig::from_env().is_none());

        std::env::set_var(ENV_USER, "envuser");
        std::env::set_var(ENV_TIMEOUT_SECS, "3");
        let config = RemoteConfig::from_env().unwrap();
        std::env::remove_var(ENV_USER);
        std::env::remove_var(ENV_TIMEOUT_SECS);

        assert_eq!(config.username, "envuser");
        assert_eq!(config.repository, DEFAULT_REPOSITORY);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_base_url_override_gets_trailing_slash() {
        let config = RemoteConfig::new("unused").with_base_url("http://127.0.0.1:8080/data");
        assert_eq!(
            config.url_for(RemoteFile::LongTermStrategy),
            "http://127.0.0.1:8080/data/optimizer_lt.csv"
        );
    }
}
