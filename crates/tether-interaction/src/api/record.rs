//! RecordApi - `POST /api/record`, the Sheets record logger endpoint.

use crate::exchange::HttpExchange;
use crate::request::ApiRequest;
use tether_core::ApiResult;
use tether_core::error::Result;
use tether_core::payload::{RecordPayload, RecordResponse};
use tether_core::session::BearerToken;

pub const RECORD_PATH: &str = "/api/record";

#[derive(Clone)]
pub struct RecordApi {
    exchange: HttpExchange,
}

impl RecordApi {
    pub fn new(exchange: HttpExchange) -> Self {
        Self { exchange }
    }

    /// Submits one record. `Err` only when the payload is rejected before sending.
    ///
    /// On success the message is the server's `message` field, verbatim.
    pub async fn submit(
        &self,
        payload: &RecordPayload,
        token: Option<&BearerToken>,
    ) -> Result<ApiResult> {
        let request = ApiRequest::post(RECORD_PATH).json(payload)?.bearer(token)?;

        Ok(match self.exchange.send::<RecordResponse>(request).await {
            Ok(response) => {
                if let Some(status) = &response.status {
                    tracing::debug!(%status, "Record accepted");
                }
                ApiResult::success(response.message)
            }
            Err(err) => err.into(),
        })
    }
}
