#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use terraware_client::{BaseUrl, ClientConfig, Credential, RefreshToken};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/protocol/openid-connect/token";

/// Base URL pointing at a mock server.
pub fn mock_base_url(server: &MockServer) -> BaseUrl {
    BaseUrl::new(server.uri()).unwrap()
}

/// Build an unsigned refresh token whose payload names the given issuer and client id.
pub fn refresh_token_for(issuer: &str, client_id: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS512","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        json!({"iss": issuer, "azp": client_id, "typ": "Offline"}).to_string(),
    );
    format!("{}.{}.c2lnbmF0dXJl", header, payload)
}

/// Config for a client that refreshes tokens against the mock server itself.
pub fn refresh_config(server: &MockServer) -> ClientConfig {
    let token = refresh_token_for(&server.uri(), "cid");
    ClientConfig::new(mock_base_url(server))
        .with_credential(Credential::Refresh(RefreshToken::new(token)))
}

/// Token endpoint mock that hands out `access_token` for up to `times` calls.
pub fn token_endpoint(access_token: &str, times: u64) -> Mock {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("client_id=cid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": access_token,
            "token_type": "Bearer",
            "expires_in": 300
        })))
        .up_to_n_times(times)
        .expect(times)
}
