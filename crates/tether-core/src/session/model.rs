//! Session domain model.
//!
//! Represents the currently authenticated user for the lifetime of the running client.

use chrono::{DateTime, Utc};
use std::fmt;

/// Opaque identity token issued by the credential provider.
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this token.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken(<redacted, {} chars>)", self.0.len())
    }
}

/// The signed-in user.
///
/// Created on successful sign-in, dropped on sign-out. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Name shown in the header of the signed-in screen
    pub display_name: String,
    /// Account email (the credential id)
    pub email: String,
    /// Token sent as `Authorization: Bearer <token>`
    pub token: BearerToken,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        token: BearerToken,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            token,
            signed_in_at: Utc::now(),
        }
    }

    /// Greeting line for the signed-in header.
    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.display_name)
    }
}
