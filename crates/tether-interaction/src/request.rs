//! Request builder: one typed payload plus the optional bearer token.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tether_core::error::{Result, TetherError};
use tether_core::payload::Validate;
use tether_core::session::BearerToken;

/// A fully described request, ready for [`crate::HttpExchange::send`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    bearer: Option<BearerToken>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Validates and serializes `payload` as the JSON body.
    pub fn json<P>(mut self, payload: &P) -> Result<Self>
    where
        P: Serialize + Validate,
    {
        payload.validate()?;
        self.body = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// Validates `payload` and sends its top-level fields as query parameters.
    pub fn query<P>(mut self, payload: &P) -> Result<Self>
    where
        P: Serialize + Validate,
    {
        payload.validate()?;
        let Value::Object(fields) = serde_json::to_value(payload)? else {
            return Err(TetherError::invalid_input(
                "query payload must serialize to an object",
            ));
        };
        self.query = fields
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| match value {
                Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect();
        Ok(self)
    }

    /// Attaches `Authorization: Bearer <token>` when a token is present.
    ///
    /// Fails if the token cannot be carried in a header.
    pub fn bearer(mut self, token: Option<&BearerToken>) -> Result<Self> {
        if let Some(token) = token {
            HeaderValue::from_str(&token.authorization_value())
                .map_err(|_| TetherError::credential("token is not a valid header value"))?;
        }
        self.bearer = token.cloned();
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn has_bearer(&self) -> bool {
        self.bearer.is_some()
    }

    /// Header set for this request.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if self.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(token) = &self.bearer {
            let mut value = HeaderValue::from_str(&token.authorization_value())
                .map_err(|_| TetherError::credential("token is not a valid header value"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Serialized JSON body, if any.
    pub fn body_bytes(&self) -> Result<Option<Vec<u8>>> {
        self.body
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()
            .map_err(TetherError::from)
    }
}
