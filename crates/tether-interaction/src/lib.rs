//! HTTP side of Tether: request building, the single-request exchange, and one
//! client per backend endpoint.

pub mod api;
pub mod config;
pub mod exchange;
pub mod request;

pub use api::{AddApi, AddMethod, RecordApi, TranslateApi};
pub use config::ConfigStorage;
pub use exchange::{ExchangeError, HttpExchange};
pub use request::ApiRequest;
