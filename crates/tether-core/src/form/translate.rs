use crate::payload::TranslatePayload;
use serde::{Deserialize, Serialize};

/// The translator input box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateForm {
    pub text: String,
}

impl TranslateForm {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Blank input never reaches the network.
    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn to_payload(&self) -> TranslatePayload {
        TranslatePayload {
            text: self.text.clone(),
        }
    }
}
