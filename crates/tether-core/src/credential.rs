//! Credential provider interface.
//!
//! The provider is the platform identity service (a Google-style credential
//! manager on a device). Tether only consumes it: it asks for a credential and,
//! on sign-out, asks it to forget whatever it cached.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Display name used when the credential carries none.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Options sent with a credential request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRequest {
    /// OAuth client id of the backend the token is minted for
    pub server_client_id: Option<String>,
    /// Restrict the chooser to accounts that already authorized the app
    pub filter_by_authorized_accounts: bool,
    /// Skip the chooser when exactly one account qualifies
    pub auto_select: bool,
}

impl CredentialRequest {
    pub fn new(server_client_id: Option<String>) -> Self {
        Self {
            server_client_id,
            filter_by_authorized_accounts: false,
            auto_select: true,
        }
    }
}

/// A credential returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// An identity token credential, the only kind sign-in accepts.
    IdToken {
        /// Account id, which is the email address
        id: String,
        display_name: Option<String>,
        id_token: String,
    },
    /// Any other credential type (passkey, password, ...)
    Other { credential_type: String },
}

impl Credential {
    pub fn credential_type(&self) -> &str {
        match self {
            Credential::IdToken { .. } => "id_token",
            Credential::Other { credential_type } => credential_type,
        }
    }
}

/// Platform identity service consumed by the sign-in flow.
#[async_trait::async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Runs the interactive consent step and returns a credential.
    async fn get_credential(&self, request: &CredentialRequest) -> Result<Credential>;

    /// Drops any credential state the provider cached.
    async fn clear_credential_state(&self) -> Result<()>;
}
