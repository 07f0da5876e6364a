//! Error types for the Tether client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Tether crates.
///
/// Typed, structured variants with automatic conversion from the error types
/// the client touches (I/O, JSON, TOML, HTTP transport).
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TetherError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential provider or sign-in error
    #[error("Credential error: {0}")]
    Credential(String),

    /// Operation requires a signed-in session
    #[error("Not signed in")]
    NotSignedIn,

    /// Payload rejected before it was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Another exchange is still in flight
    #[error("A request is already in flight")]
    Busy,

    /// HTTP transport error outside of an exchange (client construction, etc.)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TetherError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Credential error
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential(message.into())
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a credential error
    pub fn is_credential(&self) -> bool {
        matches!(self, Self::Credential(_))
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a busy error
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    /// Check if this is a not-signed-in error
    pub fn is_not_signed_in(&self) -> bool {
        matches!(self, Self::NotSignedIn)
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TetherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TetherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TetherError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for TetherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// A type alias for `Result<T, TetherError>`.
pub type Result<T> = std::result::Result<T, TetherError>;
