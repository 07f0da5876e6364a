//! AppController - the top-level screen controller.
//!
//! Owns the session exclusively and passes its token to each API call.
//! `&mut self` on every mutating method gives the single-writer discipline a
//! UI event loop would.

use crate::calculator;
use crate::monitor::ExchangeMonitor;
use std::sync::Arc;
use tether_core::ApiResult;
use tether_core::config::ClientConfig;
use tether_core::credential::{
    Credential, CredentialProvider, CredentialRequest, DEFAULT_DISPLAY_NAME,
};
use tether_core::error::{Result, TetherError};
use tether_core::form::{NumberPairForm, RecordForm, TranslateForm};
use tether_core::session::{BearerToken, Session, SessionHolder};
use tether_interaction::{AddApi, AddMethod, HttpExchange, RecordApi, TranslateApi};

pub struct AppController {
    config: ClientConfig,
    provider: Arc<dyn CredentialProvider>,
    sessions: SessionHolder,
    record_api: RecordApi,
    add_api: AddApi,
    translate_api: TranslateApi,
    monitor: ExchangeMonitor,
    record_form: RecordForm,
    last_result: Option<ApiResult>,
}

impl AppController {
    /// Creates a controller talking to `config.base_url`.
    pub fn new(config: ClientConfig, provider: Arc<dyn CredentialProvider>) -> Self {
        Self::with_exchange(HttpExchange::new(config), provider)
    }

    pub fn with_exchange(exchange: HttpExchange, provider: Arc<dyn CredentialProvider>) -> Self {
        Self {
            config: exchange.config().clone(),
            provider,
            sessions: SessionHolder::new(),
            record_api: RecordApi::new(exchange.clone()),
            add_api: AddApi::new(exchange.clone()),
            translate_api: TranslateApi::new(exchange),
            monitor: ExchangeMonitor::new(),
            record_form: RecordForm::default(),
            last_result: None,
        }
    }

    // ============================================================================
    // Session
    // ============================================================================

    /// Asks the credential provider for an identity token and starts a session.
    ///
    /// On any failure the controller stays signed out (or keeps the prior
    /// session) and the error is logged as well as returned.
    pub async fn sign_in(&mut self) -> Result<&Session> {
        let request = CredentialRequest::new(self.config.server_client_id.clone());

        let credential = match self.provider.get_credential(&request).await {
            Ok(credential) => credential,
            Err(e) => {
                tracing::error!(error = %e, "Login failed or was cancelled by the user");
                return Err(e);
            }
        };

        let session = match credential {
            Credential::IdToken {
                id,
                display_name,
                id_token,
            } => {
                if id_token.trim().is_empty() {
                    tracing::error!("Received an invalid id token response");
                    return Err(TetherError::credential("id token is empty"));
                }
                Session::new(
                    display_name.unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
                    id,
                    BearerToken::new(id_token),
                )
            }
            Credential::Other { credential_type } => {
                tracing::warn!(%credential_type, "Unexpected credential type");
                return Err(TetherError::credential(format!(
                    "unsupported credential type: {credential_type}"
                )));
            }
        };

        tracing::info!(email = %session.email, "Login successful");
        self.sessions.set(session);
        self.sessions
            .current()
            .ok_or_else(|| TetherError::internal("session missing right after sign-in"))
    }

    /// Clears the session. The provider-side clear is best-effort.
    pub async fn sign_out(&mut self) {
        self.sessions.clear(self.provider.as_ref()).await;
        self.record_form.clear();
        self.last_result = None;
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.sessions.current()
    }

    fn token(&self) -> Option<&BearerToken> {
        self.sessions.current().map(|s| &s.token)
    }

    // ============================================================================
    // Record logger
    // ============================================================================

    pub fn record_form(&self) -> &RecordForm {
        &self.record_form
    }

    pub fn record_form_mut(&mut self) -> &mut RecordForm {
        &mut self.record_form
    }

    /// Submits the record form with the session token.
    ///
    /// Requires a session. The form is cleared only when the result is a success.
    pub async fn submit_record(&mut self) -> Result<ApiResult> {
        let token = self.token().cloned().ok_or(TetherError::NotSignedIn)?;
        let ticket = self.monitor.try_begin()?;

        let payload = self.record_form.to_payload(self.config.resource.clone());
        let result = self.record_api.submit(&payload, Some(&token)).await?;

        ticket.finish(&result);
        if result.success {
            self.record_form.clear();
        }
        self.last_result = Some(result.clone());
        Ok(result)
    }

    // ============================================================================
    // Calculator and remote add
    // ============================================================================

    /// Local addition; never touches the network.
    pub fn add_locally(&self, form: &NumberPairForm) -> String {
        calculator::result_text(form)
    }

    /// `/add` over GET or POST. The token is attached when signed in.
    pub async fn add_remote(
        &mut self,
        method: AddMethod,
        form: &NumberPairForm,
    ) -> Result<ApiResult> {
        let ticket = self.monitor.try_begin()?;
        let result = self
            .add_api
            .add(method, &form.to_payload(), self.token())
            .await?;
        ticket.finish(&result);
        self.last_result = Some(result.clone());
        Ok(result)
    }

    // ============================================================================
    // Translator
    // ============================================================================

    /// Translates the form text. Blank input is rejected without a request.
    pub async fn translate(&mut self, form: &TranslateForm) -> Result<ApiResult> {
        if !form.is_submittable() {
            return Err(TetherError::invalid_input("text to translate is blank"));
        }
        let ticket = self.monitor.try_begin()?;
        let result = self
            .translate_api
            .translate(&form.to_payload(), self.token())
            .await?;
        ticket.finish(&result);
        self.last_result = Some(result.clone());
        Ok(result)
    }

    // ============================================================================
    // Presenter hooks
    // ============================================================================

    /// Handle for rendering a busy state while a request is outstanding.
    pub fn monitor(&self) -> ExchangeMonitor {
        self.monitor.clone()
    }

    pub fn last_result(&self) -> Option<&ApiResult> {
        self.last_result.as_ref()
    }
}
