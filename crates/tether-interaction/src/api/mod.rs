//! One client per backend endpoint.
//!
//! Each client builds its request from a typed payload, runs it through the
//! shared [`HttpExchange`](crate::HttpExchange) and turns the outcome into an
//! [`ApiResult`](tether_core::ApiResult).

mod add;
mod record;
mod translate;

pub use add::{AddApi, AddMethod};
pub use record::RecordApi;
pub use translate::TranslateApi;
