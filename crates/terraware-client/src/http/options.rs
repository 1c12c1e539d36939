//! Per-request options.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, InvalidInputError};

/// Extra headers, query pairs and JSON body for a single request.
///
/// Headers given here win over the client's auth header when the names
/// collide.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use terraware_client::RequestOptions;
///
/// let options = RequestOptions::new()
///     .query("organizationId", "3")
///     .json(json!({"name": "Nursery"}));
/// assert!(options.body().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl RequestOptions {
    /// Create empty request options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the JSON body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the JSON body from any serializable value.
    pub fn json_from<T: Serialize>(self, body: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(body).map_err(|e| InvalidInputError::Other {
            message: format!("request body is not serializable: {}", e),
        })?;
        Ok(self.json(value))
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}
