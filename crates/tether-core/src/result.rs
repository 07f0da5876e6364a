//! Normalized outcome of one HTTP exchange.

use serde::{Deserialize, Serialize};

/// What the presenter receives after an exchange, whatever went wrong underneath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult {
    pub success: bool,
    pub message: String,
}

impl ApiResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl std::fmt::Display for ApiResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
