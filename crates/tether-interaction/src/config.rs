//! Configuration file management for Tether.
//!
//! Supports reading client settings from `~/.config/tether/config.toml`,
//! layered over environment variables and defaults.

use std::fs;
use std::path::{Path, PathBuf};
use tether_core::config::{ClientConfig, ConfigFile};
use tether_core::error::{Result, TetherError};

/// Storage for the client configuration file (config.toml).
///
/// Read-only. A missing file is not an error: the environment and defaults
/// fill in.
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates a ConfigStorage with the default path (~/.config/tether/config.toml).
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a ConfigStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file, `None` if it does not exist.
    pub fn load_file(&self) -> Result<Option<ConfigFile>> {
        if !self.path.exists() {
            tracing::debug!(
                path = %self.path.display(),
                "No config file, using environment and defaults"
            );
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            TetherError::config(format!(
                "Failed to read configuration file at {}: {}",
                self.path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map(Some).map_err(|e| {
            TetherError::config(format!(
                "Failed to parse configuration file at {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Resolves the client configuration: file > environment > defaults.
    pub fn load(&self) -> Result<ClientConfig> {
        let file = self.load_file()?;
        ClientConfig::resolve(file, |key| std::env::var(key).ok())
    }

    /// Returns the path to the configuration file: ~/.config/tether/config.toml
    fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TetherError::config("Could not determine home directory"))?;
        Ok(home.join(".config").join("tether").join("config.toml"))
    }
}
