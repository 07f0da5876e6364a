//! TranslateApi - `POST /translate`.

use crate::exchange::HttpExchange;
use crate::request::ApiRequest;
use tether_core::ApiResult;
use tether_core::error::Result;
use tether_core::payload::{TranslatePayload, TranslateResponse};
use tether_core::session::BearerToken;

pub const TRANSLATE_PATH: &str = "/translate";

#[derive(Clone)]
pub struct TranslateApi {
    exchange: HttpExchange,
}

impl TranslateApi {
    pub fn new(exchange: HttpExchange) -> Self {
        Self { exchange }
    }

    /// Translates `payload.text`; the success message is the translated text.
    ///
    /// Blank text is rejected with `InvalidInput` and nothing is sent.
    pub async fn translate(
        &self,
        payload: &TranslatePayload,
        token: Option<&BearerToken>,
    ) -> Result<ApiResult> {
        let request = ApiRequest::post(TRANSLATE_PATH).json(payload)?.bearer(token)?;

        Ok(match self.exchange.send::<TranslateResponse>(request).await {
            Ok(response) => ApiResult::success(response.translated_text),
            Err(err) => err.into(),
        })
    }
}
