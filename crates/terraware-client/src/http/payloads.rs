//! Wire formats of the token endpoint and the terraware error envelope.

use serde::{Deserialize, Serialize};

/// Form body for the refresh-token grant.
#[derive(Debug, Serialize)]
pub(crate) struct RefreshTokenGrant<'a> {
    pub client_id: &'a str,
    pub grant_type: &'static str,
    pub refresh_token: &'a str,
}

impl<'a> RefreshTokenGrant<'a> {
    pub fn new(client_id: &'a str, refresh_token: &'a str) -> Self {
        Self {
            client_id,
            grant_type: "refresh_token",
            refresh_token,
        }
    }
}

/// Successful token endpoint response. Only the access token is used.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Failed token endpoint response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenErrorResponse {
    pub error_description: String,
}

/// terraware-server error envelope: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorDetails,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetails {
    pub message: String,
}
