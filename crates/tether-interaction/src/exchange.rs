//! HttpExchange - one request, one response, one mapped outcome.
//!
//! No retries, no backoff and no timeout beyond the transport defaults. The
//! only cancellation is the caller dropping the future.

use crate::request::ApiRequest;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tether_core::ApiResult;
use tether_core::config::ClientConfig;
use thiserror::Error;
use tracing::Instrument;

pub const CONNECT_FAILURE_MESSAGE: &str = "Failed to connect. Is the server running?";
pub const UNAUTHORIZED_MESSAGE: &str = "Error: 401 Unauthorized. Token may be invalid.";
pub const MALFORMED_MESSAGE: &str = "Malformed response from server.";

/// Why an exchange failed. `Display` is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// No connection, DNS failure, reset, unreadable body...
    #[error("Failed to connect. Is the server running?")]
    Transport(String),

    /// HTTP 401, whatever the body says
    #[error("Error: 401 Unauthorized. Token may be invalid.")]
    Unauthorized,

    /// Any other non-2xx status
    #[error("Server Error: {code}")]
    Status { code: u16, detail: Option<String> },

    /// 2xx whose body is not the expected JSON
    #[error("Malformed response from server.")]
    Malformed(String),
}

impl ExchangeError {
    /// Underlying cause, for logs only.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ExchangeError::Transport(detail) | ExchangeError::Malformed(detail) => Some(detail),
            ExchangeError::Status { detail, .. } => detail.as_deref(),
            ExchangeError::Unauthorized => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ExchangeError::Unauthorized => Some(401),
            ExchangeError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<ExchangeError> for ApiResult {
    fn from(err: ExchangeError) -> Self {
        ApiResult::failure(err.to_string())
    }
}

/// Flask-style error body: `{"error": "..."}` or `{"status": "error", "message": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Maps a status line and body to the decoded success body or an [`ExchangeError`].
pub fn classify<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ExchangeError> {
    if status.is_success() {
        return serde_json::from_str(body).map_err(|e| ExchangeError::Malformed(e.to_string()));
    }

    if status == StatusCode::UNAUTHORIZED {
        return Err(ExchangeError::Unauthorized);
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()));

    Err(ExchangeError::Status {
        code: status.as_u16(),
        detail,
    })
}

/// Sends requests against the configured base URL.
#[derive(Clone)]
pub struct HttpExchange {
    client: Client,
    config: ClientConfig,
}

impl HttpExchange {
    /// Creates an exchange with a default `reqwest` client.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues exactly one request and awaits exactly one response.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ExchangeError> {
        let exchange_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!(
            "exchange",
            %exchange_id,
            method = %request.method(),
            path = request.path(),
            authenticated = request.has_bearer()
        );

        async move {
            let outcome = self.send_inner(&request).await;
            match &outcome {
                Ok(_) => tracing::info!("Exchange succeeded"),
                Err(err) => tracing::warn!(
                    error = %err,
                    detail = err.detail().unwrap_or(""),
                    "Exchange failed"
                ),
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn send_inner<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T, ExchangeError> {
        let url = self.config.endpoint(request.path());

        // Builders already validated token and body; these only fail on a hand-built request.
        let headers = request
            .headers()
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;
        let body = request
            .body_bytes()
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        let mut builder = self
            .client
            .request(request.method().clone(), &url)
            .headers(headers);
        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ExchangeError::Transport(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ExchangeError::Transport(format!("failed to read response body: {e}")))?;

        tracing::debug!(status = status.as_u16(), bytes = text.len(), "Response received");
        classify(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct MessageBody {
        message: String,
    }

    #[test]
    fn test_success_with_expected_key() {
        let body: MessageBody =
            classify(StatusCode::CREATED, r#"{"status":"ok","message":"saved"}"#).unwrap();
        assert_eq!(body.message, "saved");
    }

    #[test]
    fn test_unauthorized_ignores_body() {
        for body in ["", "not json", r#"{"message":"saved"}"#] {
            let err = classify::<MessageBody>(StatusCode::UNAUTHORIZED, body).unwrap_err();
            assert_eq!(err, ExchangeError::Unauthorized);
            assert_eq!(ApiResult::from(err).message, UNAUTHORIZED_MESSAGE);
        }
    }

    #[test]
    fn test_other_status_carries_code() {
        let err = classify::<MessageBody>(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"status":"error","message":"sheet locked"}"#,
        )
        .unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.detail(), Some("sheet locked"));
        assert_eq!(err.to_string(), "Server Error: 500");
    }

    #[test]
    fn test_malformed_success_is_failure() {
        let err = classify::<MessageBody>(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, ExchangeError::Malformed(_)));
        let missing = classify::<MessageBody>(StatusCode::OK, r#"{"status":"ok"}"#).unwrap_err();
        assert!(matches!(missing, ExchangeError::Malformed(_)));
        assert_eq!(ApiResult::from(missing), ApiResult::failure(MALFORMED_MESSAGE));
    }

    #[test]
    fn test_transport_message_is_fixed() {
        let result = ApiResult::from(ExchangeError::Transport("connection refused".into()));
        assert!(!result.success);
        assert_eq!(result.message, CONNECT_FAILURE_MESSAGE);
    }
}
