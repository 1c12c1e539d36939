//! Facilities command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::Value;

use terraware_client::TerrawareClient;

use crate::output;

#[derive(Args, Debug)]
pub struct FacilitiesArgs {
    /// Print the raw JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &TerrawareClient, args: FacilitiesArgs) -> Result<()> {
    let facilities = client
        .list_facilities()
        .await
        .context("Failed to list facilities")?;

    if args.json {
        return output::json(&facilities, true);
    }

    if facilities.is_empty() {
        eprintln!("{}", "No facilities found.".dimmed());
        return Ok(());
    }

    for facility in &facilities {
        output::field("ID", &display(&facility["id"]));
        output::field("Name", &display(&facility["name"]));
        output::field("Type", &display(&facility["type"]));
        output::field("Organization", &display(&facility["organizationId"]));
        println!();
    }

    Ok(())
}

/// Render a JSON scalar without quotes; missing values become `-`.
pub(super) fn display(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
