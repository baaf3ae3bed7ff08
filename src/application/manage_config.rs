//! Configuration management use case

use crate::error::{CapsuleError, Result};
use crate::infrastructure::{Config, Vault};

/// Service for reading and writing capsule configuration
pub struct ConfigService {
    vault: Vault,
}

impl ConfigService {
    pub fn new(vault: Vault) -> Self {
        ConfigService { vault }
    }

    /// Load the full configuration
    pub fn list(&self) -> Result<Config> {
        self.vault.load_config()
    }

    /// Get a single configuration value by key
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.vault.load_config()?;
        match key {
            "user" => Ok(config.user),
            "editor" => Ok(config.editor),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(CapsuleError::Config(format!(
                "Unknown config key: '{}'. Valid keys: user, editor, created",
                key
            ))),
        }
    }

    /// Set a configuration value by key
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.vault.load_config()?;
        match key {
            "user" => config.user = value.to_string(),
            "editor" => config.editor = value.to_string(),
            "created" => {
                return Err(CapsuleError::Config(
                    "Config key 'created' is read-only".to_string(),
                ))
            }
            _ => {
                return Err(CapsuleError::Config(format!(
                    "Unknown config key: '{}'. Valid keys: user, editor",
                    key
                )))
            }
        }
        self.vault.save_config(&config)
    }
}
