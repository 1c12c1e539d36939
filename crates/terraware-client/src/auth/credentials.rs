//! Client credential type.

use crate::error::{Error, InvalidInputError};

use super::tokens::{AccessToken, RefreshToken, SessionCookie};

/// The single credential a client authenticates with.
///
/// # Example
///
/// ```
/// use terraware_client::Credential;
///
/// let credential = Credential::from_options(None, Some("abc123".into()), None).unwrap();
/// assert!(matches!(credential, Credential::Session(_)));
/// ```
#[derive(Clone, Debug, Default)]
pub enum Credential {
    /// Sent as `Authorization: Bearer <token>`.
    Bearer(AccessToken),
    /// Sent as `Cookie: SESSION=<value>`.
    Session(SessionCookie),
    /// Exchanged for access tokens; never sent to terraware-server.
    Refresh(RefreshToken),
    /// Anonymous: no auth header is attached.
    #[default]
    None,
}

impl Credential {
    /// Pick the credential out of a set of optional sources.
    ///
    /// Empty strings count as absent. Giving more than one source is an
    /// error; giving none yields [`Credential::None`].
    pub fn from_options(
        bearer: Option<String>,
        session: Option<String>,
        refresh_token: Option<String>,
    ) -> Result<Self, Error> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        match (present(bearer), present(session), present(refresh_token)) {
            (None, None, None) => Ok(Credential::None),
            (Some(token), None, None) => Ok(Credential::Bearer(AccessToken::new(token))),
            (None, Some(cookie), None) => Ok(Credential::Session(SessionCookie::new(cookie))),
            (None, None, Some(token)) => Ok(Credential::Refresh(RefreshToken::new(token))),
            _ => Err(InvalidInputError::ConflictingCredentials.into()),
        }
    }

    /// True if a 401 can be recovered from by fetching a new access token.
    pub fn is_refreshable(&self) -> bool {
        matches!(self, Credential::Refresh(_))
    }

    /// Short name of the credential kind, safe for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Credential::Bearer(_) => "bearer",
            Credential::Session(_) => "session",
            Credential::Refresh(_) => "refresh-token",
            Credential::None => "none",
        }
    }
}
