//! Letter collection persistence
//!
//! The store owns the in-memory collection and calls into one of these
//! backends after every mutation. The contract is deliberately small:
//! load the whole collection once at startup, save the whole collection
//! after each change.

use crate::domain::Letter;
use crate::error::{CapsuleError, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Persistence backend for the letter collection
pub trait LetterStorage {
    /// Load the previously saved collection; `None` means no prior state
    fn load(&self) -> Result<Option<Vec<Letter>>>;

    /// Save the full collection, replacing whatever was there
    fn save(&self, letters: &[Letter]) -> Result<()>;
}

/// Stores the collection as one JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStorage { path }
    }
}

impl LetterStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Letter>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let letters = serde_json::from_str(&contents).map_err(|e| {
            CapsuleError::Storage(format!(
                "Letters file {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(Some(letters))
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn save(&self, letters: &[Letter]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(letters)?;

        let tmp_name = format!(
            "{}.capsule-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("letters.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// Keeps the serialized collection in memory.
///
/// Serializes through real serde so tests exercise the same round-trip
/// as the file backend. Also useful for embedders that want an ephemeral
/// store. Clones share the same backing buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl LetterStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Letter>>> {
        let contents = self
            .contents
            .lock()
            .map_err(|_| CapsuleError::Storage("memory storage lock poisoned".to_string()))?;

        match contents.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, letters: &[Letter]) -> Result<()> {
        let json = serde_json::to_string(letters)?;
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| CapsuleError::Storage("memory storage lock poisoned".to_string()))?;
        *contents = Some(json);
        Ok(())
    }
}
