//! Configuration management

use crate::error::{CapsuleError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active user id; every query is scoped to it
    pub user: String,
    pub editor: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config for the given user
    pub fn new(user: String) -> Self {
        Config {
            user,
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Load config from .capsule/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".capsule").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CapsuleError::NotACapsule(path.to_path_buf())
            } else {
                CapsuleError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| CapsuleError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .capsule/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let capsule_dir = path.join(".capsule");
        let config_path = capsule_dir.join("config.toml");

        if !capsule_dir.exists() {
            fs::create_dir(&capsule_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CapsuleError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Default user id from the environment, falling back to "me"
    pub fn default_user() -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "me".to_string())
    }
}
