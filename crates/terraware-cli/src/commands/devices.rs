//! Devices command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use terraware_client::TerrawareClient;

use super::facilities::display;
use crate::output;

#[derive(Args, Debug)]
pub struct DevicesArgs {
    /// Facility whose devices to list
    #[arg(long)]
    pub facility: i64,

    /// Print the raw JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &TerrawareClient, args: DevicesArgs) -> Result<()> {
    let devices = client
        .list_devices(args.facility)
        .await
        .with_context(|| format!("Failed to list devices for facility {}", args.facility))?;

    if args.json {
        return output::json(&devices, true);
    }

    if devices.is_empty() {
        eprintln!("{}", "No devices found.".dimmed());
        return Ok(());
    }

    for device in &devices {
        output::field("ID", &display(&device["id"]));
        output::field("Name", &display(&device["name"]));
        output::field("Type", &display(&device["type"]));
        output::field("Make", &display(&device["make"]));
        output::field("Model", &display(&device["model"]));
        println!();
    }

    Ok(())
}
