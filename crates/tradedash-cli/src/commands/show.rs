//! Show command: one render pass plus display.

use std::fs;

use anyhow::{Context, Result};

use tradedash_engine::{render, RenderOutcome, SourceNotice};
use tradedash_source::{Origin, RemoteConfig};

use crate::cli::{OriginArg, OutputFormat, ShowArgs};
use crate::output;

/// Executes the show command.
pub fn execute(args: ShowArgs) -> Result<()> {
    // The remote settings are only consulted for the github origin.
    let config = match super::remote_config(&args.remote) {
        Ok(config) => config,
        Err(err) if args.origin == OriginArg::Github => return Err(err),
        Err(_) => RemoteConfig::new("local"),
    };

    let origin = match args.origin {
        OriginArg::Github => Origin::Remote(args.file.to_remote()),
        OriginArg::Upload => {
            let bytes = match &args.upload {
                Some(path) => Some(
                    fs::read(path)
                        .with_context(|| format!("failed to read {}", path.display()))?,
                ),
                None => None,
            };
            Origin::Upload(bytes)
        }
        OriginArg::Sample => Origin::Sample,
    };

    let outcome = render(&origin, &config)?;

    if args.format == OutputFormat::Json {
        return print_json(&outcome);
    }

    match outcome {
        RenderOutcome::AwaitingUpload => {
            output::print_info("Please provide a CSV file with --upload <path>");
        }
        RenderOutcome::NoData => {
            output::print_warning("No data available");
        }
        RenderOutcome::Rendered(view) => {
            if let Some(SourceNotice::RemoteUnavailable { reason }) = &view.notice {
                output::print_error(&format!("Could not load from repository: {reason}"));
                output::print_info(&format!(
                    "Check that the files exist at {}",
                    config.repository_url()
                ));
                output::print_warning("Showing the illustrative sample row instead");
            }

            output::print_header("Portfolio Data");
            output::print_dataset(&view.dataset);

            output::print_header("Summary");
            output::print_summary(&view.summary);

            output::print_footer();
        }
    }

    Ok(())
}

fn print_json(outcome: &RenderOutcome) -> Result<()> {
    let value = match outcome {
        RenderOutcome::AwaitingUpload => serde_json::json!({ "status": "awaiting_upload" }),
        RenderOutcome::NoData => serde_json::json!({ "status": "no_data" }),
        RenderOutcome::Rendered(view) => serde_json::json!({
            "status": "rendered",
            "view": view,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
