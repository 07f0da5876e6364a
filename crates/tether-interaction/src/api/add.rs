//! AddApi - `GET /add?a=&b=` and `POST /add {a, b}`.

use crate::exchange::HttpExchange;
use crate::request::ApiRequest;
use tether_core::ApiResult;
use tether_core::error::Result;
use tether_core::parse::format_number;
use tether_core::payload::{AddPayload, AddResponse};
use tether_core::session::BearerToken;

pub const ADD_PATH: &str = "/add";

/// How the operands travel: query string or JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddMethod {
    #[default]
    Get,
    Post,
}

impl AddMethod {
    fn label(self) -> &'static str {
        match self {
            AddMethod::Get => "GET",
            AddMethod::Post => "POST",
        }
    }
}

#[derive(Clone)]
pub struct AddApi {
    exchange: HttpExchange,
}

impl AddApi {
    pub fn new(exchange: HttpExchange) -> Self {
        Self { exchange }
    }

    /// Adds remotely. The success message reads `GET Result: 7` / `POST Result: 7`.
    pub async fn add(
        &self,
        method: AddMethod,
        payload: &AddPayload,
        token: Option<&BearerToken>,
    ) -> Result<ApiResult> {
        let request = match method {
            AddMethod::Get => ApiRequest::get(ADD_PATH).query(payload)?,
            AddMethod::Post => ApiRequest::post(ADD_PATH).json(payload)?,
        }
        .bearer(token)?;

        Ok(match self.exchange.send::<AddResponse>(request).await {
            Ok(response) => ApiResult::success(format!(
                "{} Result: {}",
                method.label(),
                format_number(response.result)
            )),
            Err(err) => err.into(),
        })
    }
}
