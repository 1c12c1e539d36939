//! CSV export command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use terraware_client::TerrawareClient;

use super::input;
use crate::output;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// JSON file with the search request (use - for stdin)
    #[arg(long)]
    pub json: String,

    /// File to write the CSV to (defaults to stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub async fn run(client: &TerrawareClient, args: ExportArgs) -> Result<()> {
    let search = input::read_json(&args.json)?;

    let csv = client
        .export_search_csv(search)
        .await
        .context("Failed to export search results")?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &csv)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output::success(&format!("Wrote {} bytes to {}", csv.len(), path.display()));
        }
        None => output::raw(&csv)?,
    }

    Ok(())
}
