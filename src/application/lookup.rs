//! Letter id resolution
//!
//! Commands take a full id or any unambiguous prefix of one, scoped to
//! the acting user's letters.

use crate::error::{CapsuleError, Result};
use crate::store::LetterStore;
use uuid::Uuid;

/// Number of id characters shown in listings; enough to stay unique for
/// any realistic collection
const SHORT_ID_LEN: usize = 8;

/// Abbreviated id for display
pub fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(SHORT_ID_LEN).collect()
}

/// Resolve a full id or id prefix to the single matching letter id.
///
/// Ambiguous prefixes resolve to nothing; the not-found suggestions tell
/// the user to provide more characters.
pub fn resolve_letter_id(store: &LetterStore, user_id: &str, id_ref: &str) -> Result<Uuid> {
    let needle = id_ref.trim().to_lowercase();
    if needle.is_empty() {
        return Err(CapsuleError::LetterNotFound(id_ref.to_string()));
    }

    let matches: Vec<Uuid> = store
        .letters_by_user(user_id)
        .iter()
        .filter(|letter| letter.id.to_string().starts_with(&needle))
        .map(|letter| letter.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        _ => Err(CapsuleError::LetterNotFound(id_ref.to_string())),
    }
}
