use anyhow::Result;
use std::sync::Arc;
use tether_core::ApiResult;
use tether_core::config::ClientConfig;
use tether_core::credential::CredentialProvider;
use tether_core::form::TranslateForm;

pub async fn run(
    config: ClientConfig,
    provider: Arc<dyn CredentialProvider>,
    text: String,
) -> Result<ApiResult> {
    let mut app = super::signed_in_controller(config, provider).await?;
    let result = app.translate(&TranslateForm::new(text)).await?;
    app.sign_out().await;
    Ok(result)
}
