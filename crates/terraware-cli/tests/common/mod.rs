#![allow(dead_code)]

use std::process::Output;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use tokio::process::Command;

pub const TOKEN_PATH: &str = "/protocol/openid-connect/token";

/// Environment variables the binary reads; cleared so the caller's shell can't leak in.
const CONNECTION_ENV: &[&str] = &[
    "TERRAWARE_URL",
    "TERRAWARE_BEARER",
    "TERRAWARE_SESSION",
    "TERRAWARE_REFRESH_TOKEN",
    "RUST_LOG",
];

/// Run the CLI binary with arguments and extra environment variables.
///
/// Uses tokio's process API so a mock server on the same runtime keeps serving.
pub async fn run_cli(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_terraware"));
    for var in CONNECTION_ENV {
        cmd.env_remove(var);
    }
    cmd.args(args);
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().await.expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(args: &[&str], env: &[(&str, &str)]) -> String {
    let output = run_cli(args, env).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub async fn run_cli_failure(args: &[&str], env: &[(&str, &str)]) -> String {
    let output = run_cli(args, env).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Build an unsigned refresh token naming the given issuer and client id.
pub fn refresh_token_for(issuer: &str, client_id: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS512","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        json!({"iss": issuer, "azp": client_id, "typ": "Offline"}).to_string(),
    );
    format!("{}.{}.c2lnbmF0dXJl", header, payload)
}
