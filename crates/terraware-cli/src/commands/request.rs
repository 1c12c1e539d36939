//! Raw request commands: get, post, put, delete.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tracing::debug;

use terraware_client::{RequestOptions, TerrawareClient};

use super::input;
use crate::cli::{parse_header_pair, parse_query_pair};
use crate::output;

#[derive(Clone, Copy, Debug)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Request path (e.g., /api/v1/facilities)
    pub path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(long = "query", short = 'q', value_parser = parse_query_pair)]
    pub query: Vec<(String, String)>,

    /// Extra header as name:value (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header_pair)]
    pub headers: Vec<(String, String)>,

    /// JSON file with the request body (use - for stdin)
    #[arg(long)]
    pub json: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl RequestArgs {
    fn options(&self) -> Result<RequestOptions> {
        let mut options = RequestOptions::new();
        for (key, value) in &self.query {
            options = options.query(key.as_str(), value.as_str());
        }
        for (name, value) in &self.headers {
            options = options.header(name.as_str(), value.as_str());
        }
        if let Some(path) = &self.json {
            options = options.json(input::read_json(path)?);
        }
        Ok(options)
    }
}

pub async fn run(client: &TerrawareClient, verb: Verb, args: RequestArgs) -> Result<()> {
    let options = args.options()?;
    debug!(verb = verb.as_str(), path = %args.path, "running request");

    let response: Value = match verb {
        Verb::Get => client.get(&args.path, options).await,
        Verb::Post => client.post(&args.path, options).await,
        Verb::Put => client.put(&args.path, options).await,
        Verb::Delete => client.delete(&args.path, options).await,
    }
    .with_context(|| format!("{} {} failed", verb.as_str(), args.path))?;

    if !response.is_null() {
        output::json(&response, args.pretty)?;
    }

    Ok(())
}
