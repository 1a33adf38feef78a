//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use tradedash_source::RemoteFile;

/// Tradedash - portfolio dashboard for strategy CSV files
#[derive(Parser)]
#[command(name = "tradedash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Load a portfolio and display the table and summary metrics
    Show(ShowArgs),

    /// Generate a downloadable sample CSV file
    Sample(SampleArgs),

    /// Print the named remote files and their resolved URLs
    Urls(UrlsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Data origin selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OriginArg {
    /// Fetch a named file from the configured repository
    Github,
    /// Read an uploaded CSV file from disk
    Upload,
    /// Use the built-in sample portfolio
    #[default]
    Sample,
}

/// Named remote file selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FileArg {
    /// Short Term Strategy (optimizer_st.csv)
    #[default]
    ShortTerm,
    /// Long Term Strategy (optimizer_lt.csv)
    LongTerm,
    /// Sample Portfolio (sample_portfolio.csv)
    SamplePortfolio,
}

impl FileArg {
    /// Maps the CLI selection onto the remote naming convention.
    pub fn to_remote(self) -> RemoteFile {
        match self {
            Self::ShortTerm => RemoteFile::ShortTermStrategy,
            Self::LongTerm => RemoteFile::LongTermStrategy,
            Self::SamplePortfolio => RemoteFile::SamplePortfolio,
        }
    }
}

/// Remote repository settings, injected via flags or environment.
#[derive(Args, Debug, Clone)]
pub struct RemoteArgs {
    /// Repository account/user the raw files are served from
    #[arg(long, env = "TRADEDASH_GITHUB_USER")]
    pub github_user: Option<String>,

    /// Repository name
    #[arg(long, env = "TRADEDASH_GITHUB_REPO")]
    pub github_repo: Option<String>,

    /// Branch the raw files are served from
    #[arg(long, env = "TRADEDASH_GITHUB_BRANCH")]
    pub github_branch: Option<String>,

    /// Fetch timeout in whole seconds
    #[arg(long, env = "TRADEDASH_FETCH_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Data origin
    #[arg(short, long, value_enum, default_value = "sample")]
    pub origin: OriginArg,

    /// Named remote file (github origin)
    #[arg(short, long, value_enum, default_value = "short-term")]
    pub file: FileArg,

    /// Path of the uploaded CSV file (upload origin)
    #[arg(short, long)]
    pub upload: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub remote: RemoteArgs,
}

/// Arguments for the sample command
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Which sample file to generate
    #[arg(short, long, value_enum, default_value = "short-term")]
    pub file: FileArg,

    /// Write to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the urls command
#[derive(Args, Debug)]
pub struct UrlsArgs {
    #[command(flatten)]
    pub remote: RemoteArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_arg_mapping() {
        assert_eq!(FileArg::ShortTerm.to_remote(), RemoteFile::ShortTermStrategy);
        assert_eq!(FileArg::LongTerm.to_remote(), RemoteFile::LongTermStrategy);
        assert_eq!(
            FileArg::SamplePortfolio.to_remote(),
            RemoteFile::SamplePortfolio
        );
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
