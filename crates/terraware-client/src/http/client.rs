//! Authenticated terraware HTTP client.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, COOKIE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, trace};

use crate::auth::claims::{self, RefreshClaims};
use crate::auth::{AccessToken, Credential, RefreshToken};
use crate::error::{ApiError, AuthError, Error, HttpError, InvalidInputError};
use crate::types::BaseUrl;

use super::config::ClientConfig;
use super::options::RequestOptions;
use super::payloads::{ApiErrorEnvelope, RefreshTokenGrant, TokenErrorResponse, TokenResponse};

/// HTTP client for terraware-server.
///
/// Every request carries the configured credential. When the client was
/// built from a refresh token, a `401 Unauthorized` answer triggers exactly
/// one access-token refresh followed by exactly one retry of the request;
/// whatever the retry returns is final. Any other credential surfaces a 401
/// directly.
///
/// Clones share the same connection pool and access token.
///
/// # Example
///
/// ```no_run
/// use serde_json::Value;
/// use terraware_client::{BaseUrl, ClientConfig, Credential, RefreshToken, RequestOptions, TerrawareClient};
///
/// # async fn example() -> Result<(), terraware_client::Error> {
/// let config = ClientConfig::new(BaseUrl::new("https://terraware.example.org")?)
///     .with_credential(Credential::Refresh(RefreshToken::new("eyJ...")));
/// let client = TerrawareClient::connect(config).await?;
///
/// let facilities: Value = client.get("/api/v1/facilities", RequestOptions::new()).await?;
/// println!("{}", facilities);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TerrawareClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: BaseUrl,
    auth: AuthState,
}

enum AuthState {
    Anonymous,
    /// Bearer token or session cookie, attached unchanged to every request.
    Static {
        name: HeaderName,
        value: HeaderValue,
    },
    Refreshing(RefreshState),
}

struct RefreshState {
    refresh_token: RefreshToken,
    claims: RefreshClaims,
    /// Replaced wholesale on every refresh.
    access_token: RwLock<Option<AccessToken>>,
}

impl AuthState {
    fn from_credential(credential: Credential) -> Result<Self, Error> {
        match credential {
            Credential::None => Ok(AuthState::Anonymous),
            Credential::Bearer(token) => Ok(AuthState::Static {
                name: AUTHORIZATION,
                value: bearer_value(&token)?,
            }),
            Credential::Session(cookie) => Ok(AuthState::Static {
                name: COOKIE,
                value: sensitive_value(&COOKIE, format!("SESSION={}", cookie.as_str()))?,
            }),
            Credential::Refresh(refresh_token) => {
                let claims = claims::decode_unverified(refresh_token.as_str())?;
                Ok(AuthState::Refreshing(RefreshState {
                    refresh_token,
                    claims,
                    access_token: RwLock::new(None),
                }))
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AuthState::Anonymous => "none",
            AuthState::Static { name, .. } if *name == COOKIE => "session",
            AuthState::Static { .. } => "bearer",
            AuthState::Refreshing(_) => "refresh-token",
        }
    }
}

impl TerrawareClient {
    /// Build a client and, for refresh-token credentials, fetch the first
    /// access token before returning.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is unusable or the initial token fetch fails.
    #[instrument(skip(config), fields(base = %config.base_url(), credential = config.credential().kind()))]
    pub async fn connect(config: ClientConfig) -> Result<Self, Error> {
        let client = Self::build(config)?;

        if let AuthState::Refreshing(state) = &client.inner.auth {
            client.refresh_access_token(state).await?;
        }

        debug!("client ready");
        Ok(client)
    }

    /// Build a client that sends no auth header.
    pub fn anonymous(base_url: BaseUrl) -> Result<Self, Error> {
        Self::build(ClientConfig::new(base_url))
    }

    fn build(config: ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let base_url = config.base_url().clone();
        let auth = AuthState::from_credential(config.credential().clone())?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                auth,
            }),
        })
    }

    /// Returns the server this client talks to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.inner.base_url
    }

    /// True if a 401 will be answered with a token refresh and one retry.
    pub fn is_refreshable(&self) -> bool {
        matches!(self.inner.auth, AuthState::Refreshing(_))
    }

    /// The access token most recently obtained from the refresh token.
    ///
    /// `None` for other credential kinds.
    pub async fn current_access_token(&self) -> Option<AccessToken> {
        match &self.inner.auth {
            AuthState::Refreshing(state) => state.access_token.read().await.clone(),
            _ => None,
        }
    }

    /// GET `path` and parse the JSON response.
    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, Error> {
        let response = self.execute(Method::GET, path, &options).await?;
        parse_json(response).await
    }

    /// POST to `path` and parse the JSON response.
    pub async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, Error> {
        let response = self.execute(Method::POST, path, &options).await?;
        parse_json(response).await
    }

    /// PUT to `path` and parse the JSON response.
    pub async fn put<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, Error> {
        let response = self.execute(Method::PUT, path, &options).await?;
        parse_json(response).await
    }

    /// DELETE `path` and parse the JSON response.
    pub async fn delete<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, Error> {
        let response = self.execute(Method::DELETE, path, &options).await?;
        parse_json(response).await
    }

    /// POST to `path` and hand back the unread response.
    ///
    /// For endpoints that answer with something other than JSON, such as
    /// CSV exports. Error statuses and the 401 retry are handled exactly as
    /// for [`post`](Self::post).
    pub async fn post_raw(&self, path: &str, options: RequestOptions) -> Result<Response, Error> {
        self.execute(Method::POST, path, &options).await
    }

    /// Send a request, refreshing and retrying once on 401 when possible.
    #[instrument(skip(self, options), fields(base = %self.inner.base_url))]
    async fn execute(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Response, Error> {
        let url = self.inner.base_url.join(path);
        debug!(%url, "sending request");

        let response = self.send_once(&method, &url, options).await?;

        let AuthState::Refreshing(state) = &self.inner.auth else {
            return check_status(response).await;
        };
        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        info!("request unauthorized, refreshing access token");
        self.refresh_access_token(state).await?;

        let retry = self.send_once(&method, &url, options).await?;
        check_status(retry).await
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        options: &RequestOptions,
    ) -> Result<Response, Error> {
        let headers = self.request_headers(options).await?;

        let mut request = self
            .inner
            .http
            .request(method.clone(), url)
            .headers(headers);
        if !options.query_pairs().is_empty() {
            request = request.query(options.query_pairs());
        }
        if let Some(body) = options.body() {
            request = request.json(body);
        }

        let response = request.send().await?;
        trace!(status = %response.status(), "response received");
        Ok(response)
    }

    /// Auth header first, then the caller's headers on top of it.
    async fn request_headers(&self, options: &RequestOptions) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();

        match &self.inner.auth {
            AuthState::Anonymous => {}
            AuthState::Static { name, value } => {
                headers.insert(name.clone(), value.clone());
            }
            AuthState::Refreshing(state) => {
                let current = state.access_token.read().await.clone();
                let token = match current {
                    Some(token) => token,
                    None => self.refresh_access_token(state).await?,
                };
                headers.insert(AUTHORIZATION, bearer_value(&token)?);
            }
        }

        for (name, value) in options.headers() {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| InvalidInputError::Header {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| InvalidInputError::Header {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Exchange the refresh token for a new access token and store it.
    #[instrument(skip(self, state), fields(issuer = %state.claims.issuer, client_id = %state.claims.client_id))]
    async fn refresh_access_token(&self, state: &RefreshState) -> Result<AccessToken, Error> {
        let endpoint = state.claims.token_endpoint();
        debug!(%endpoint, "requesting access token");

        let grant = RefreshTokenGrant::new(&state.claims.client_id, state.refresh_token.as_str());
        let response = self.inner.http.post(&endpoint).form(&grant).send().await?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<TokenErrorResponse>(&body) {
                Ok(err) => AuthError::RefreshRejected {
                    message: err.error_description,
                }
                .into(),
                Err(_) => HttpError::Status { status, body }.into(),
            });
        }

        let body: TokenResponse = response.json().await?;
        let token = body
            .access_token
            .filter(|token| !token.is_empty())
            .map(AccessToken::new)
            .ok_or(AuthError::MissingAccessToken)?;

        *state.access_token.write().await = Some(token.clone());

        info!("access token refreshed");
        Ok(token)
    }
}

impl std::fmt::Debug for TerrawareClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerrawareClient")
            .field("base_url", &self.inner.base_url)
            .field("credential", &self.inner.auth.kind())
            .finish()
    }
}

fn bearer_value(token: &AccessToken) -> Result<HeaderValue, Error> {
    sensitive_value(&AUTHORIZATION, format!("Bearer {}", token.as_str()))
}

fn sensitive_value(name: &HeaderName, value: String) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(&value).map_err(|e| InvalidInputError::Header {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Pass responses below 400 through; turn the rest into errors.
async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status().as_u16();
    if status < 400 {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!(status, "request failed");
    Err(error_from_body(status, body))
}

fn error_from_body(status: u16, body: String) -> Error {
    match serde_json::from_str::<ApiErrorEnvelope>(&body) {
        Ok(envelope) => ApiError::new(status, envelope.error.message, body).into(),
        Err(_) => HttpError::Status { status, body }.into(),
    }
}

/// Parse a success body as JSON. An empty body reads as `null`.
async fn parse_json<R: DeserializeOwned>(response: Response) -> Result<R, Error> {
    let bytes = response.bytes().await?;
    let parsed = if bytes.is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(&bytes)
    };

    parsed.map_err(|e| {
        HttpError::Decode {
            message: e.to_string(),
        }
        .into()
    })
}
