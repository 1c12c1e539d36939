//! Error types for the terraware client.
//!
//! Failures fall into three families: authentication problems ([`AuthError`]),
//! structured API errors returned by terraware-server ([`ApiError`]), and
//! everything else that went wrong at the HTTP level ([`HttpError`]).
//! Bad caller input gets its own [`InvalidInputError`] variant.

use std::fmt;
use thiserror::Error;

/// The unified error type for terraware client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-2xx/3xx status without a structured body, or a transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Missing or malformed credential, or a failed token refresh.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The server rejected the request with a structured error message.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Caller-supplied input could not be used.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status code of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http(HttpError::Status { status, .. }) => Some(*status),
            Error::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// True if the server answered with 401 Unauthorized.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// HTTP-level errors: unstructured error statuses and transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a status >= 400 and no structured error body.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be decoded.
    #[error("malformed response: {message}")]
    Decode { message: String },

    /// Any other transport failure.
    #[error("{message}")]
    Other { message: String },
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if err.is_connect() {
            HttpError::Connection {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            HttpError::Decode {
                message: err.to_string(),
            }
        } else {
            HttpError::Other {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(HttpError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The refresh token could not be decoded into issuer and client id.
    #[error("malformed refresh token: {reason}")]
    MalformedRefreshToken { reason: String },

    /// The identity provider refused to issue an access token.
    #[error("token refresh rejected: {message}")]
    RefreshRejected { message: String },

    /// The token endpoint answered successfully but without an access token.
    #[error("token response did not contain an access token")]
    MissingAccessToken,
}

/// A structured error returned by terraware-server.
///
/// The server wraps failures in `{"error": {"message": "..."}}`; the message
/// is lifted out and the raw body is kept alongside it.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server.
    pub message: String,
    /// The response body as received.
    pub body: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// A header name or value that cannot be sent.
    #[error("invalid header '{name}': {reason}")]
    Header { name: String, reason: String },

    /// More than one credential was supplied.
    #[error("only one of bearer token, session cookie or refresh token may be given")]
    ConflictingCredentials,

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code() {
        let err = Error::from(HttpError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        });
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn api_error_carries_message() {
        let err = Error::from(ApiError::new(422, "Invalid input", "{}"));
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.to_string(), "API error: HTTP 422: Invalid input");
    }

    #[test]
    fn unauthorized_detection() {
        let err = Error::from(HttpError::Status {
            status: 401,
            body: String::new(),
        });
        assert!(err.is_unauthorized());
        assert!(!Error::from(AuthError::MissingAccessToken).is_unauthorized());
    }
}
