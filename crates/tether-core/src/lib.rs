//! Domain types for the Tether authenticate-then-call client.
//!
//! Nothing in this crate performs I/O except the `CredentialProvider` trait
//! it declares.

pub mod config;
pub mod credential;
pub mod error;
pub mod form;
pub mod parse;
pub mod payload;
pub mod result;
pub mod session;

// Re-export common types
pub use error::{Result, TetherError};
pub use result::ApiResult;
