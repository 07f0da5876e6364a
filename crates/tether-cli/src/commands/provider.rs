//! Environment-backed credential provider.
//!
//! Terminals have no platform credential manager, so the identity token is
//! read from the environment instead.

use async_trait::async_trait;
use std::env;
use tether_core::credential::{Credential, CredentialProvider, CredentialRequest};
use tether_core::error::{Result, TetherError};

pub const ENV_ID_TOKEN: &str = "TETHER_ID_TOKEN";
pub const ENV_EMAIL: &str = "TETHER_EMAIL";
pub const ENV_DISPLAY_NAME: &str = "TETHER_DISPLAY_NAME";

pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    pub fn is_configured() -> bool {
        env::var(ENV_ID_TOKEN).is_ok_and(|token| !token.trim().is_empty())
    }

    fn credential_from<F>(lookup: F) -> Result<Credential>
    where
        F: Fn(&str) -> Option<String>,
    {
        let id_token = lookup(ENV_ID_TOKEN).ok_or_else(|| {
            TetherError::credential(format!("{ENV_ID_TOKEN} not found in environment variables"))
        })?;
        let id = lookup(ENV_EMAIL).ok_or_else(|| {
            TetherError::credential(format!("{ENV_EMAIL} not found in environment variables"))
        })?;

        Ok(Credential::IdToken {
            id,
            display_name: lookup(ENV_DISPLAY_NAME),
            id_token,
        })
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credential(&self, request: &CredentialRequest) -> Result<Credential> {
        if let Some(client_id) = &request.server_client_id {
            tracing::debug!(%client_id, "Requesting credential");
        }
        Self::credential_from(|key| env::var(key).ok())
    }

    // Nothing is cached outside the process environment.
    async fn clear_credential_state(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_credential_from_env() {
        let credential = EnvCredentialProvider::credential_from(lookup(&[
            (ENV_ID_TOKEN, "tok"),
            (ENV_EMAIL, "jo@example.com"),
        ]))
        .unwrap();
        assert_eq!(
            credential,
            Credential::IdToken {
                id: "jo@example.com".into(),
                display_name: None,
                id_token: "tok".into(),
            }
        );
    }

    #[test]
    fn test_missing_token_is_credential_error() {
        let err = EnvCredentialProvider::credential_from(lookup(&[(ENV_EMAIL, "jo@example.com")]))
            .unwrap_err();
        assert!(err.is_credential());
    }

    #[tokio::test]
    async fn test_clear_is_noop() {
        assert!(EnvCredentialProvider.clear_credential_state().await.is_ok());
    }
}
