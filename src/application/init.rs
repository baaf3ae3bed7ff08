//! Initialize capsule use case

use crate::error::Result;
use crate::infrastructure::{Config, Vault};
use std::fs;
use std::path::Path;

/// Initialize a new capsule at the specified path.
pub fn init(path: &Path, user: Option<String>) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let vault = Vault::new(path.to_path_buf());
    vault.initialize()?;

    let user = user.unwrap_or_else(Config::default_user);
    let config = Config::new(user);
    vault.save_config(&config)?;

    println!("Initialized capsule at {}", path.display());
    println!("User: {}", config.user);

    Ok(())
}
