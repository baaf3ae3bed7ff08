//! Error types for capsule

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the capsule application
#[derive(Debug, Error)]
pub enum CapsuleError {
    #[error("Not a capsule directory: {0}")]
    NotACapsule(PathBuf),

    #[error("Invalid delivery date: {0}")]
    InvalidDeliveryDate(String),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("No letter found matching: {0}")]
    LetterNotFound(String),

    #[error("Letter {id} is still sealed ({days_left} days until delivery)")]
    LetterLocked { id: String, days_left: i64 },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CapsuleError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CapsuleError::NotACapsule(_) => 2,
            CapsuleError::InvalidDeliveryDate(_) | CapsuleError::InvalidMood(_) => 3,
            CapsuleError::LetterNotFound(_) => 4,
            CapsuleError::LetterLocked { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CapsuleError::NotACapsule(path) => {
                format!(
                    "Not a capsule directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'capsule init' in this directory to start a new capsule\n\
                    • Navigate to an existing capsule directory\n\
                    • Set CAPSULE_ROOT environment variable to your capsule path",
                    path.display()
                )
            }
            CapsuleError::InvalidDeliveryDate(ref_str) => {
                format!(
                    "Invalid delivery date: '{}'\n\n\
                    Valid delivery dates:\n\
                    • tomorrow\n\
                    • next monday, next friday, etc.\n\
                    • in <n> hours/days/weeks/months/years\n\
                    • Specific dates: DD-MM-YYYY (e.g., 25-12-2026)\n\n\
                    Examples:\n\
                    capsule write --deliver tomorrow ...\n\
                    capsule write --deliver 'in 6 months' ...\n\
                    capsule write --deliver 01-01-2030 ...",
                    ref_str
                )
            }
            CapsuleError::InvalidMood(mood) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods: happy, sad, calm, reflective, excited, grateful, hopeful\n\
                    Use 'capsule moods' to see the full catalog",
                    mood
                )
            }
            CapsuleError::LetterNotFound(id) => {
                format!(
                    "No letter found matching: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'capsule list' to see your letters and their ids\n\
                    • An id prefix works as long as it is unambiguous\n\
                    • Check the --user flag if you keep letters for several users",
                    id
                )
            }
            CapsuleError::LetterLocked { id, days_left } => {
                let countdown = if *days_left > 1 {
                    format!("It unlocks in {} days.", days_left)
                } else {
                    "It unlocks within a day.".to_string()
                };
                format!(
                    "Letter {} is still sealed. {}\n\n\
                    Suggestions:\n\
                    • Use 'capsule list --locked' to watch the countdown\n\
                    • Future you will thank present you for waiting",
                    id, countdown
                )
            }
            CapsuleError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: capsule config editor 'vim'\n\
                    • Pass the letter body directly: capsule write --message '...'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CapsuleError
pub type Result<T> = std::result::Result<T, CapsuleError>;
