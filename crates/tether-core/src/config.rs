//! Client configuration model.
//!
//! Loading from disk lives in `tether-interaction`; this module only holds the
//! shape, the defaults, and the environment overlay.

use crate::error::{Result, TetherError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_RESOURCE: &str = "Android";

pub const ENV_BASE_URL: &str = "TETHER_BASE_URL";
pub const ENV_SERVER_CLIENT_ID: &str = "TETHER_SERVER_CLIENT_ID";
pub const ENV_RESOURCE: &str = "TETHER_RESOURCE";

/// Root structure of `config.toml`. Every key is optional.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub server_client_id: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port every endpoint path is appended to
    pub base_url: String,
    /// Backend client id passed to the credential provider
    pub server_client_id: Option<String>,
    /// Tag sent as `resource` with submitted records
    pub resource: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            server_client_id: None,
            resource: Some(DEFAULT_RESOURCE.to_string()),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let config = Self {
            base_url: base_url.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolves the configuration.
    ///
    /// Priority: config file > environment > defaults.
    pub fn resolve<F>(file: Option<ConfigFile>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let config = Self {
            base_url: file
                .base_url
                .or_else(|| env(ENV_BASE_URL))
                .unwrap_or(defaults.base_url),
            server_client_id: file
                .server_client_id
                .or_else(|| env(ENV_SERVER_CLIENT_ID)),
            resource: file
                .resource
                .or_else(|| env(ENV_RESOURCE))
                .or(defaults.resource),
        };
        config.validate()?;
        Ok(config)
    }

    /// The base URL must be an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            TetherError::config(format!("invalid base_url '{}': {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TetherError::config(format!(
                "base_url '{}' must use http or https",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Joins the base URL and an endpoint path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
