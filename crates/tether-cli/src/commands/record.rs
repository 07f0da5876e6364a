use anyhow::Result;
use std::sync::Arc;
use tether_core::ApiResult;
use tether_core::config::ClientConfig;
use tether_core::credential::CredentialProvider;
use tether_core::form::RecordForm;

pub async fn run(
    config: ClientConfig,
    provider: Arc<dyn CredentialProvider>,
    form: RecordForm,
) -> Result<ApiResult> {
    let mut app = super::signed_in_controller(config, provider).await?;
    *app.record_form_mut() = form;
    let result = app.submit_record().await?;
    // One-shot process: signing out only releases the session.
    app.sign_out().await;
    Ok(result)
}
