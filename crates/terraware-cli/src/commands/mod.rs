//! Subcommand implementations.

mod devices;
mod export;
mod facilities;
mod input;
mod request;
mod timeseries;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::ConnectionArgs;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a GET request
    Get(request::RequestArgs),

    /// Send a POST request
    Post(request::RequestArgs),

    /// Send a PUT request
    Put(request::RequestArgs),

    /// Send a DELETE request
    Delete(request::RequestArgs),

    /// Run a search and save the results as CSV
    Export(export::ExportArgs),

    /// List accessible facilities
    Facilities(facilities::FacilitiesArgs),

    /// List the devices at a facility
    Devices(devices::DevicesArgs),

    /// List the timeseries of a device
    Timeseries(timeseries::TimeseriesArgs),
}

pub async fn handle(connection: ConnectionArgs, command: Commands) -> Result<()> {
    let client = connection.connect().await?;

    match command {
        Commands::Get(args) => request::run(&client, request::Verb::Get, args).await,
        Commands::Post(args) => request::run(&client, request::Verb::Post, args).await,
        Commands::Put(args) => request::run(&client, request::Verb::Put, args).await,
        Commands::Delete(args) => request::run(&client, request::Verb::Delete, args).await,
        Commands::Export(args) => export::run(&client, args).await,
        Commands::Facilities(args) => facilities::run(&client, args).await,
        Commands::Devices(args) => devices::run(&client, args).await,
        Commands::Timeseries(args) => timeseries::run(&client, args).await,
    }
}
