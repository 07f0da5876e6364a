pub mod calc;
pub mod provider;
pub mod record;
pub mod translate;

use anyhow::{Context, Result};
use colored::Colorize;
use std::sync::Arc;
use tether_application::AppController;
use tether_core::ApiResult;
use tether_core::config::ClientConfig;
use tether_core::credential::CredentialProvider;
use tether_interaction::ConfigStorage;

/// Loads config.toml / environment, then applies the `--base-url` override.
pub fn load_config(base_url: Option<String>) -> Result<ClientConfig> {
    let mut config = ConfigStorage::new()
        .and_then(|storage| storage.load())
        .context("failed to load configuration")?;

    if let Some(base_url) = base_url {
        config.base_url = base_url;
        config.validate().context("invalid --base-url")?;
    }
    Ok(config)
}

/// Builds a controller and signs in with `provider`.
pub async fn signed_in_controller(
    config: ClientConfig,
    provider: Arc<dyn CredentialProvider>,
) -> Result<AppController> {
    let mut app = AppController::new(config, provider);
    let session = app
        .sign_in()
        .await
        .context("sign-in failed (set TETHER_ID_TOKEN and TETHER_EMAIL)")?;
    eprintln!("{}", session.greeting().bold());
    eprintln!("{}", session.email.dimmed());
    Ok(app)
}

/// Process exit status for a finished exchange.
pub fn exit_code(result: &ApiResult) -> i32 {
    if result.success { 0 } else { 1 }
}

/// Prints the result in the success or error colour.
pub fn present(result: &ApiResult) {
    if result.success {
        println!("{}", result.message.green());
    } else {
        println!("{}", result.message.red());
    }
}
