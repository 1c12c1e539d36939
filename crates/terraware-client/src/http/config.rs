//! Client configuration.

use std::time::Duration;

use crate::auth::Credential;
use crate::types::BaseUrl;

/// Immutable settings a [`TerrawareClient`](super::TerrawareClient) is built from.
///
/// # Example
///
/// ```
/// use terraware_client::{BaseUrl, ClientConfig, Credential, SessionCookie};
///
/// let config = ClientConfig::new(BaseUrl::new("http://localhost:8080").unwrap())
///     .with_credential(Credential::Session(SessionCookie::new("abc123")));
/// assert_eq!(config.credential().kind(), "session");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: BaseUrl,
    credential: Credential,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create an anonymous configuration for the given server.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            credential: Credential::None,
            user_agent: concat!("terraware-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }

    /// Set the credential requests are authenticated with.
    #[must_use]
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    /// Override the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Apply a per-request timeout. Without one the transport default is used.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(BaseUrl::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_anonymous_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url().as_str(), "http://localhost:8080");
        assert!(matches!(config.credential(), Credential::None));
        assert!(config.user_agent().starts_with("terraware-client/"));
        assert!(config.timeout().is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::default()
            .with_user_agent("scripts/1.0")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.user_agent(), "scripts/1.0");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}
