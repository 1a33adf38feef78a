//! Urls command: list the named remote files and their resolved URLs.

use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

use tradedash_source::RemoteFile;

use crate::cli::UrlsArgs;
use crate::output;

#[derive(Tabled)]
struct UrlRow {
    #[tabled(rename = "File")]
    label: &'static str,
    #[tabled(rename = "URL")]
    url: String,
}

/// Executes the urls command.
pub fn execute(args: UrlsArgs) -> Result<()> {
    let config = super::remote_config(&args.remote)?;

    let rows: Vec<UrlRow> = RemoteFile::ALL
        .into_iter()
        .map(|file| UrlRow {
            label: file.label(),
            url: config.url_for(file),
        })
        .collect();

    output::print_header("Remote files");
    println!("{}", Table::new(rows).with(Style::rounded()).to_string());
    output::print_info(&format!("Repository: {}", config.repository_url()));

    Ok(())
}
