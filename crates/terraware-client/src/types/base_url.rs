//! Base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Where terraware-server listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// A validated terraware-server base URL.
///
/// The URL must be absolute, use `http` or `https`, and carry a host.
/// Trailing slashes are dropped so request paths can be appended directly.
///
/// # Example
///
/// ```
/// use terraware_client::BaseUrl;
///
/// let base = BaseUrl::new("http://host:8080/").unwrap();
/// assert_eq!(base.join("/api/v1/x"), "http://host:8080/api/v1/x");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL for a request path.
    ///
    /// A missing leading slash on `path` is added, so `"api/v1/x"` and
    /// `"/api/v1/x"` resolve to the same URL.
    pub fn join(&self, path: &str) -> String {
        let base = self.as_str();
        if path.is_empty() {
            base.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Returns the base URL as a string, without a trailing slash.
    pub fn as_str(&self) -> &str {
        // Url keeps a "/" path on bare hosts; strip it along with any
        // user-supplied trailing slashes.
        self.0.as_str().trim_end_matches('/')
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("must use http or https"));
        }

        if url.host_str().is_none() {
            return Err(invalid("must have a host"));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not contain a query or fragment"));
        }

        Ok(())
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"))
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
