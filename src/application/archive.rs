//! Bulk archive operations: export, import, clear

use crate::domain::Letter;
use crate::error::Result;
use crate::store::{ImportOutcome, LetterStore};
use std::fs;
use std::path::Path;

/// Serialize a user's letters as pretty-printed JSON
pub fn export_letters(store: &LetterStore, user_id: &str) -> Result<String> {
    let letters = store.export_letters(user_id);
    Ok(serde_json::to_string_pretty(&letters)?)
}

/// Write a user's letters to a JSON file; returns how many were written
pub fn export_to_file(store: &LetterStore, user_id: &str, path: &Path) -> Result<usize> {
    let letters = store.export_letters(user_id);
    let json = serde_json::to_string_pretty(&letters)?;
    fs::write(path, json)?;
    Ok(letters.len())
}

/// Read letters from a JSON file and append them to the store.
///
/// Invalid records and id collisions are skipped, not fatal; the outcome
/// reports both counts.
pub fn import_from_file(store: &mut LetterStore, path: &Path) -> Result<ImportOutcome> {
    let contents = fs::read_to_string(path)?;
    let letters: Vec<Letter> = serde_json::from_str(&contents)?;
    store.import_letters(letters)
}

/// Remove every letter for every user; returns how many were removed
pub fn clear_all(store: &mut LetterStore) -> Result<usize> {
    let removed = store.len();
    store.clear()?;
    Ok(removed)
}
