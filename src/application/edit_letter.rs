//! Edit letter use case

use crate::application::lookup::resolve_letter_id;
use crate::domain::LetterPatch;
use crate::error::{CapsuleError, Result};
use crate::store::LetterStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Apply a partial update to the letter matching `id_ref`.
pub fn edit_letter(
    store: &mut LetterStore,
    user_id: &str,
    id_ref: &str,
    patch: LetterPatch,
    now: DateTime<Utc>,
) -> Result<Uuid> {
    if patch.is_empty() {
        return Err(CapsuleError::Config(
            "Nothing to change; pass at least one field to edit".to_string(),
        ));
    }

    let id = resolve_letter_id(store, user_id, id_ref)?;
    store.update(id, patch, now)?;
    Ok(id)
}
