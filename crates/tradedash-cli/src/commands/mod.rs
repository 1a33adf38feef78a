//! Command implementations.

pub mod sample;
pub mod show;
pub mod urls;

use anyhow::{bail, Result};
use std::time::Duration;

use tradedash_source::RemoteConfig;

use crate::cli::RemoteArgs;

/// Builds the remote configuration from CLI/environment settings.
///
/// The account identifier must be supplied explicitly; there is no built-in
/// default.
pub fn remote_config(args: &RemoteArgs) -> Result<RemoteConfig> {
    let Some(user) = &args.github_user else {
        bail!("no repository account configured; pass --github-user or set TRADEDASH_GITHUB_USER");
    };
    let mut config = RemoteConfig::new(user).with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(repo) = &args.github_repo {
        config = config.with_repository(repo);
    }
    if let Some(branch) = &args.github_branch {
        config = config.with_branch(branch);
    }
    Ok(config)
}
