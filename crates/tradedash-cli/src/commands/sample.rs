//! Sample command: generate a downloadable sample CSV file.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};

use tradedash_source::generate_sample_csv;

use crate::cli::SampleArgs;
use crate::output;

/// Executes the sample command.
pub fn execute(args: SampleArgs) -> Result<()> {
    let file = args.file.to_remote();
    let bytes = generate_sample_csv(file)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output::print_success(&format!(
                "Wrote {} ({}) - upload it to your repository",
                path.display(),
                file.file_name()
            ));
        }
        None => {
            io::stdout().write_all(&bytes)?;
        }
    }

    Ok(())
}
