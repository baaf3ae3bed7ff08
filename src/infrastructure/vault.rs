//! On-disk capsule discovery and layout
//!
//! A capsule lives in a directory containing a `.capsule/` folder, which
//! holds the config file and the letters file.

use crate::error::{CapsuleError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

const CAPSULE_DIR: &str = ".capsule";
const LETTERS_FILE: &str = "letters.json";

/// Root directory of a capsule
#[derive(Debug, Clone)]
pub struct Vault {
    pub root: PathBuf,
}

impl Vault {
    /// Create a vault handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Vault { root }
    }

    /// Discover the capsule root by walking up from the current directory.
    /// First checks the CAPSULE_ROOT environment variable, then falls back
    /// to discovery.
    pub fn discover() -> Result<Self> {
        // 1. Check CAPSULE_ROOT environment variable first
        if let Ok(root_path) = std::env::var("CAPSULE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_capsule_dir(&path) {
                return Ok(Vault::new(path));
            } else {
                return Err(CapsuleError::Config(format!(
                    "CAPSULE_ROOT is set to '{}' but no .capsule directory found. \
                    Run 'capsule init' in that directory or unset CAPSULE_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the capsule root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_capsule_dir(&current) {
                return Ok(Vault::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .capsule
                    return Err(CapsuleError::NotACapsule(start.to_path_buf()));
                }
            }
        }
    }

    fn has_capsule_dir(path: &Path) -> bool {
        path.join(CAPSULE_DIR).is_dir()
    }

    /// Check whether the .capsule directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_capsule_dir(&self.root)
    }

    /// Create the .capsule directory
    pub fn initialize(&self) -> Result<()> {
        let capsule_dir = self.root.join(CAPSULE_DIR);

        if capsule_dir.exists() {
            return Err(CapsuleError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&capsule_dir)?;
        Ok(())
    }

    /// Path of the letters file inside the capsule
    pub fn letters_path(&self) -> PathBuf {
        self.root.join(CAPSULE_DIR).join(LETTERS_FILE)
    }

    /// Load configuration from .capsule/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .capsule/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }
}
