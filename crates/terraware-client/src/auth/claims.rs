//! Unverified refresh-token claims.
//!
//! The refresh token is opaque to this client. Its payload is read only to
//! learn which issuer to ask for access tokens and under which client id;
//! the issuer checks the signature when the token is presented.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::error::AuthError;

/// Path of the OpenID Connect token endpoint below the issuer URL.
const TOKEN_ENDPOINT_PATH: &str = "/protocol/openid-connect/token";

/// Claims lifted from a refresh token's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshClaims {
    /// Issuer base URL (`iss`).
    pub issuer: String,
    /// Authorized party, i.e. the client id (`azp`).
    pub client_id: String,
}

#[derive(Deserialize)]
struct RawClaims {
    iss: Option<String>,
    azp: Option<String>,
}

impl RefreshClaims {
    /// Returns the issuer's token endpoint URL.
    pub fn token_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.issuer.trim_end_matches('/'),
            TOKEN_ENDPOINT_PATH
        )
    }
}

/// Decode a compact JWT's payload without verifying its signature.
pub(crate) fn decode_unverified(token: &str) -> Result<RefreshClaims, AuthError> {
    let malformed = |reason: String| AuthError::MalformedRefreshToken { reason };

    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_header), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(malformed("expected header.payload.signature".to_string())),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| malformed(format!("payload is not base64url: {}", e)))?;

    let raw: RawClaims = serde_json::from_slice(&bytes)
        .map_err(|e| malformed(format!("payload is not a JSON object: {}", e)))?;

    let issuer = raw
        .iss
        .filter(|s| !s.is_empty())
        .ok_or_else(|| malformed("missing 'iss' claim".to_string()))?;
    let client_id = raw
        .azp
        .filter(|s| !s.is_empty())
        .ok_or_else(|| malformed("missing 'azp' claim".to_string()))?;

    Ok(RefreshClaims { issuer, client_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.c2lnbmF0dXJl",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_issuer_and_client_id() {
        let token = token_with_payload(r#"{"iss":"http://idp","azp":"cid","typ":"Offline"}"#);
        let claims = decode_unverified(&token).unwrap();
        assert_eq!(claims.issuer, "http://idp");
        assert_eq!(claims.client_id, "cid");
        assert_eq!(
            claims.token_endpoint(),
            "http://idp/protocol/openid-connect/token"
        );
    }

    #[test]
    fn tolerates_padding() {
        let payload = base64::engine::general_purpose::URL_SAFE
            .encode(r#"{"iss":"http://idp/realms/terraware/","azp":"api"}"#);
        let token = format!("e30.{}.sig", payload);
        let claims = decode_unverified(&token).unwrap();
        assert_eq!(
            claims.token_endpoint(),
            "http://idp/realms/terraware/protocol/openid-connect/token"
        );
    }

    #[test]
    fn rejects_single_segment() {
        assert!(matches!(
            decode_unverified("not-a-jwt"),
            Err(AuthError::MalformedRefreshToken { .. })
        ));
    }

    #[test]
    fn rejects_missing_client_id() {
        let token = token_with_payload(r#"{"iss":"http://idp"}"#);
        let err = decode_unverified(&token).unwrap_err();
        assert!(err.to_string().contains("azp"));
    }

    #[test]
    fn rejects_non_json_payload() {
        let token = format!("e30.{}.sig", URL_SAFE_NO_PAD.encode("hello"));
        assert!(decode_unverified(&token).is_err());
    }
}
