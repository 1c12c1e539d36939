//! Authenticated HTTP client.
//!
//! [`TerrawareClient`] issues requests against a fixed base URL, attaches the
//! configured credential, and recovers from an expired access token by
//! refreshing it once and retrying the request once.

mod client;
mod config;
mod options;
mod payloads;

pub use client::TerrawareClient;
pub use config::ClientConfig;
pub use options::RequestOptions;
