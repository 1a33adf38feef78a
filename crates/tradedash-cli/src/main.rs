//! Tradedash CLI - portfolio dashboard for strategy CSV files.
//!
//! # Usage
//!
//! ```bash
//! # Display the built-in sample portfolio
//! tradedash show --origin sample
//!
//! # Fetch a strategy file from your repository
//! tradedash show --origin github --file short-term --github-user trader
//!
//! # Display an uploaded CSV
//! tradedash show --origin upload --upload my_portfolio.csv
//!
//! # Generate a sample file to upload
//! tradedash sample --file short-term --output optimizer_st.csv
//!
//! # List the expected remote file URLs
//! tradedash urls --github-user trader
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => commands::show::execute(args)?,
        Commands::Sample(args) => commands::sample::execute(args)?,
        Commands::Urls(args) => commands::urls::execute(args)?,
    }

    Ok(())
}
