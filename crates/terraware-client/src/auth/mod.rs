//! Credentials and token handling.
//!
//! A client carries exactly one [`Credential`]. Bearer tokens and session
//! cookies are attached to requests as-is; a refresh token is exchanged at
//! the identity provider for short-lived access tokens.

pub(crate) mod claims;
mod credentials;
mod tokens;

pub use claims::RefreshClaims;
pub use credentials::Credential;
pub use tokens::{AccessToken, RefreshToken, SessionCookie};
