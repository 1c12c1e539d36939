//! Turning connection flags into a connected client.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use terraware_client::{BaseUrl, ClientConfig, Credential, TerrawareClient};

use crate::cli::ConnectionArgs;

impl ConnectionArgs {
    /// Build the client configuration these flags describe.
    pub fn config(&self) -> Result<ClientConfig> {
        let base_url = BaseUrl::new(&self.url).context("Invalid server URL")?;
        let credential = Credential::from_options(
            self.bearer.clone(),
            self.session.clone(),
            self.refresh_token.clone(),
        )
        .context("Use only one of --bearer, --session and --refresh-token")?;

        let mut config = ClientConfig::new(base_url)
            .with_credential(credential)
            .with_user_agent(concat!("terraware-cli/", env!("TERRAWARE_VERSION")));
        if let Some(seconds) = self.timeout {
            config = config.with_timeout(Duration::from_secs(seconds));
        }
        Ok(config)
    }

    /// Connect, fetching the first access token when a refresh token was given.
    pub async fn connect(&self) -> Result<TerrawareClient> {
        let config = self.config()?;
        debug!(credential = config.credential().kind(), "connecting");

        TerrawareClient::connect(config)
            .await
            .with_context(|| format!("Failed to connect to {}", self.url))
    }
}
