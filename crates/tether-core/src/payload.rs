//! Request and response schemas, one pair per endpoint.
//!
//! Every request body is a named struct. `validate` runs before a body is
//! serialized onto the wire.

use crate::error::{Result, TetherError};
use serde::{Deserialize, Serialize};

/// A request body that can reject itself before being sent.
pub trait Validate {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// POST /api/record
// ============================================================================

/// Body of `POST /api/record`. Strings pass through verbatim, empty included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayload {
    pub first_name: String,
    pub last_name: String,
    pub time_in: String,
    pub time_out: String,
    pub notes: String,
    /// Tag identifying the submitting client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

impl Validate for RecordPayload {}

/// Success body of `POST /api/record`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub message: String,
}

// ============================================================================
// GET|POST /add
// ============================================================================

/// Operands of `/add`, sent as query parameters for GET or a JSON body for POST.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AddPayload {
    pub a: f64,
    pub b: f64,
}

impl Validate for AddPayload {
    fn validate(&self) -> Result<()> {
        if !self.a.is_finite() || !self.b.is_finite() {
            return Err(TetherError::invalid_input(
                "operands must be finite numbers",
            ));
        }
        Ok(())
    }
}

/// Success body of `/add`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AddResponse {
    #[serde(default)]
    pub a: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    pub result: f64,
}

// ============================================================================
// POST /translate
// ============================================================================

/// Body of `POST /translate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatePayload {
    pub text: String,
}

impl Validate for TranslatePayload {
    fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(TetherError::invalid_input("text to translate is blank"));
        }
        Ok(())
    }
}

/// Success body of `POST /translate`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub original_text: Option<String>,
    pub translated_text: String,
}
