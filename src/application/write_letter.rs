//! Write letter use case

use crate::domain::LetterDraft;
use crate::error::{CapsuleError, Result};
use crate::infrastructure::{EditorSession, Vault};
use crate::store::LetterStore;
use chrono::{DateTime, Utc};
use std::fs;
use uuid::Uuid;

/// Seal a drafted letter into the store.
pub fn write_letter(
    store: &mut LetterStore,
    draft: LetterDraft,
    now: DateTime<Utc>,
) -> Result<Uuid> {
    store.add(draft, now)
}

/// Compose a letter body in the external editor.
///
/// A draft file is created inside the capsule directory, the editor runs
/// to completion, and the draft is read back and removed. An empty body
/// aborts the write.
pub fn compose_body(vault: &Vault, editor_command: String) -> Result<String> {
    let draft_path = vault.root.join(".capsule").join("draft.md");
    fs::write(&draft_path, "")?;

    let editor = EditorSession::new(editor_command);
    let composed = editor.compose(&draft_path);

    let body = fs::read_to_string(&draft_path).unwrap_or_default();
    // Draft is throwaway either way
    let _ = fs::remove_file(&draft_path);
    composed?;

    let body = body.trim_end().to_string();
    if body.trim().is_empty() {
        return Err(CapsuleError::Editor(
            "Letter body is empty; nothing was sealed".to_string(),
        ));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use crate::infrastructure::MemoryStorage;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_write_letter_appends_to_store() {
        let now = Utc.with_ymd_and_hms(2026, 1, 16, 12, 0, 0).unwrap();
        let mut store = LetterStore::open(Box::new(MemoryStorage::new())).unwrap();

        let draft = LetterDraft {
            title: "Dear me".to_string(),
            content: "hello".to_string(),
            mood: Mood::Excited,
            scheduled_date: now + Duration::days(7),
            user_id: "u1".to_string(),
            image: None,
            caption: None,
        };
        let id = write_letter(&mut store, draft, now).unwrap();

        assert_eq!(store.get(id).unwrap().title, "Dear me");
    }

    #[test]
    fn test_compose_body_with_true_editor_rejects_empty_draft() {
        // `true` exits successfully without touching the draft file, so
        // the body stays empty and the write aborts
        let temp = tempfile::TempDir::new().unwrap();
        let vault = Vault::new(temp.path().to_path_buf());
        vault.initialize().unwrap();

        let result = compose_body(&vault, "true".to_string());
        assert!(matches!(result, Err(CapsuleError::Editor(_))));
        // Draft file was cleaned up
        assert!(!temp.path().join(".capsule").join("draft.md").exists());
    }
}
