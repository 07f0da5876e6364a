use anyhow::Result;
use std::sync::Arc;
use tether_application::{AppController, calculator};
use tether_core::ApiResult;
use tether_core::config::ClientConfig;
use tether_core::credential::CredentialProvider;
use tether_core::form::NumberPairForm;
use tether_interaction::AddMethod;

/// Local addition; needs neither configuration nor network.
pub fn add_local(a: &str, b: &str) -> String {
    calculator::result_text(&NumberPairForm::new(a, b))
}

/// `/add` needs no sign-in. With `try_sign_in` the token is attached if
/// sign-in succeeds; a failed sign-in is logged and the call goes out without it.
pub async fn add_remote(
    config: ClientConfig,
    provider: Arc<dyn CredentialProvider>,
    try_sign_in: bool,
    post: bool,
    a: String,
    b: String,
) -> Result<ApiResult> {
    let mut app = AppController::new(config, provider);
    if try_sign_in {
        if let Err(e) = app.sign_in().await {
            tracing::warn!(error = %e, "Sign-in failed, calling /add without a token");
        }
    }

    let method = if post { AddMethod::Post } else { AddMethod::Get };
    let result = app.add_remote(method, &NumberPairForm::new(a, b)).await?;
    app.sign_out().await;
    Ok(result)
}
