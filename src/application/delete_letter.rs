//! Delete letter use case

use crate::application::lookup::resolve_letter_id;
use crate::error::{CapsuleError, Result};
use crate::store::LetterStore;
use uuid::Uuid;

/// Delete the letter matching `id_ref`.
///
/// Deletion is idempotent at the surface: an unknown reference returns
/// `None` rather than failing, so deleting twice succeeds quietly.
pub fn delete_letter(
    store: &mut LetterStore,
    user_id: &str,
    id_ref: &str,
) -> Result<Option<Uuid>> {
    match resolve_letter_id(store, user_id, id_ref) {
        Ok(id) => {
            store.delete(id)?;
            Ok(Some(id))
        }
        Err(CapsuleError::LetterNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
