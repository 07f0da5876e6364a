//! In-memory holder for the current session.

use super::model::Session;
use crate::credential::CredentialProvider;

/// Holds at most one session at a time.
///
/// Owned by the top-level controller and mutated only from its `&mut self`
/// methods, so no locking is involved.
#[derive(Debug, Default)]
pub struct SessionHolder {
    current: Option<Session>,
}

impl SessionHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any prior session.
    pub fn set(&mut self, session: Session) {
        if let Some(previous) = self.current.replace(session) {
            tracing::debug!(email = %previous.email, "Replaced previous session");
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Clears the local session and asks the provider to drop its cached state.
    ///
    /// The local session is gone before the provider is awaited, so a failing,
    /// hanging or abandoned provider call cannot leave it behind.
    pub async fn clear(&mut self, provider: &dyn CredentialProvider) {
        if let Some(previous) = self.current.take() {
            tracing::debug!(email = %previous.email, "Cleared local session");
        }
        match provider.clear_credential_state().await {
            Ok(()) => tracing::debug!("Successfully cleared credential state"),
            Err(e) => tracing::error!(error = %e, "Failed to clear credential state"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::{Credential, CredentialRequest};
    use crate::error::{Result, TetherError};
    use crate::session::BearerToken;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ClearingProvider {
        fail_clear: bool,
        clear_calls: AtomicUsize,
    }

    /// Provider whose clear never completes.
    struct StuckProvider;

    #[async_trait]
    impl CredentialProvider for StuckProvider {
        async fn get_credential(&self, _request: &CredentialRequest) -> Result<Credential> {
            Err(TetherError::credential("not used"))
        }

        async fn clear_credential_state(&self) -> Result<()> {
            std::future::pending().await
        }
    }

    #[async_trait]
    impl CredentialProvider for ClearingProvider {
        async fn get_credential(&self, _request: &CredentialRequest) -> Result<Credential> {
            Err(TetherError::credential("not used"))
        }

        async fn clear_credential_state(&self) -> Result<()> {
            self.clear_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_clear {
                Err(TetherError::credential("provider unavailable"))
            } else {
                Ok(())
            }
        }
    }

    fn session(name: &str) -> Session {
        Session::new(name, format!("{name}@example.com"), BearerToken::new("t"))
    }

    #[test]
    fn test_set_replaces_prior_session() {
        let mut holder = SessionHolder::new();
        holder.set(session("first"));
        holder.set(session("second"));
        assert_eq!(holder.current().map(|s| s.display_name.as_str()), Some("second"));
    }

    #[tokio::test]
    async fn test_clear_removes_session() {
        let provider = ClearingProvider {
            fail_clear: false,
            clear_calls: AtomicUsize::new(0),
        };
        let mut holder = SessionHolder::new();
        holder.set(session("jo"));

        holder.clear(&provider).await;

        assert!(holder.current().is_none());
        assert_eq!(provider.clear_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_clear_still_clears_when_provider_fails() {
        let provider = ClearingProvider {
            fail_clear: true,
            clear_calls: AtomicUsize::new(0),
        };
        let mut holder = SessionHolder::new();
        holder.set(session("jo"));

        holder.clear(&provider).await;

        assert!(holder.current().is_none());
        assert!(!holder.is_signed_in());
    }

    #[tokio::test]
    async fn test_clear_is_local_even_if_provider_never_answers() {
        let mut holder = SessionHolder::new();
        holder.set(session("jo"));

        let outcome = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            holder.clear(&StuckProvider),
        )
        .await;

        assert!(outcome.is_err());
        assert!(!holder.is_signed_in());
    }
}
