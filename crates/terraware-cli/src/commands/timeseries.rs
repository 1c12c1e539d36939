//! Timeseries command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use terraware_client::TerrawareClient;

use super::facilities::display;
use crate::output;

#[derive(Args, Debug)]
pub struct TimeseriesArgs {
    /// Device whose timeseries to list
    #[arg(long)]
    pub device: i64,

    /// Print the raw JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &TerrawareClient, args: TimeseriesArgs) -> Result<()> {
    let timeseries = client
        .list_timeseries(args.device)
        .await
        .with_context(|| format!("Failed to list timeseries for device {}", args.device))?;

    if args.json {
        return output::json(&timeseries, true);
    }

    if timeseries.is_empty() {
        eprintln!("{}", "No timeseries found.".dimmed());
        return Ok(());
    }

    for series in &timeseries {
        let name = display(&series["timeseriesName"]);
        let kind = display(&series["type"]);
        match series.get("latestValue") {
            Some(latest) => println!(
                "{} ({}) latest {} at {}",
                name,
                kind,
                display(&latest["value"]),
                display(&latest["timestamp"])
            ),
            None => println!("{} ({})", name, kind),
        }
    }

    Ok(())
}
