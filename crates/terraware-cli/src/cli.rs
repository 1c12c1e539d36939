//! CLI argument definitions.

use clap::{Args, Parser};

use terraware_client::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line client for terraware-server.
#[derive(Parser, Debug)]
#[command(name = "terraware")]
#[command(author, version = env!("TERRAWARE_VERSION"), about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the server is and how to authenticate with it.
///
/// At most one credential may be given.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Base URL of terraware-server
    #[arg(long, env = "TERRAWARE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub url: String,

    /// Access token sent as a bearer token
    #[arg(long, env = "TERRAWARE_BEARER", hide_env_values = true, global = true)]
    pub bearer: Option<String>,

    /// Value of the SESSION cookie from a logged-in browser
    #[arg(long, env = "TERRAWARE_SESSION", hide_env_values = true, global = true)]
    pub session: Option<String>,

    /// Offline refresh token used to obtain access tokens
    #[arg(
        long,
        env = "TERRAWARE_REFRESH_TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub refresh_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

/// Parse a `key=value` pair.
pub fn parse_query_pair(s: &str) -> Result<(String, String), String> {
    split_pair(s, '=').ok_or_else(|| format!("expected key=value, got '{}'", s))
}

/// Parse a `Name: value` header.
pub fn parse_header_pair(s: &str) -> Result<(String, String), String> {
    split_pair(s, ':').ok_or_else(|| format!("expected name:value, got '{}'", s))
}

fn split_pair(s: &str, separator: char) -> Option<(String, String)> {
    let (key, value) = s.split_once(separator)?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}
