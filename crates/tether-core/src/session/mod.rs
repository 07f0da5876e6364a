//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: the signed-in `Session` and its `BearerToken`
//! - `holder`: `SessionHolder`, the single owner of the current session
//!
//! # Usage
//!
//! ```ignore
//! use tether_core::session::{BearerToken, Session, SessionHolder};
//! ```

mod holder;
mod model;

// Re-export public API
pub use holder::SessionHolder;
pub use model::{BearerToken, Session};
