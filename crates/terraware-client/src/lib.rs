//! terraware-client - authenticated HTTP client for terraware-server.
//!
//! All requests flow through a [`TerrawareClient`], which attaches one
//! [`Credential`] to every call. Clients built from a refresh token fetch
//! their own access tokens and recover from a single expired-token `401`
//! by refreshing once and retrying once.
//!
//! # Example
//!
//! ```no_run
//! use terraware_client::{BaseUrl, ClientConfig, Credential, SessionCookie, TerrawareClient};
//!
//! # async fn example() -> Result<(), terraware_client::Error> {
//! let config = ClientConfig::new(BaseUrl::new("http://localhost:8080")?)
//!     .with_credential(Credential::Session(SessionCookie::new("session-id")));
//! let client = TerrawareClient::connect(config).await?;
//!
//! for facility in client.list_facilities().await? {
//!     println!("{}: {}", facility["id"], facility["name"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod error;
pub mod http;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, Credential, RefreshClaims, RefreshToken, SessionCookie};
pub use error::Error;
pub use http::{ClientConfig, RequestOptions, TerrawareClient};
pub use types::{BaseUrl, DEFAULT_BASE_URL};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
