//! Read letter use case
//!
//! Delivered letters are handed back in full; sealed letters are refused
//! with a countdown, which is the whole point of the product.

use crate::application::lookup::{resolve_letter_id, short_id};
use crate::domain::Letter;
use crate::error::{CapsuleError, Result};
use crate::store::LetterStore;
use chrono::{DateTime, Utc};

/// Fetch a letter for reading.
///
/// Accepts a full id or unique prefix. Returns `LetterLocked` when the
/// delivery date has not passed yet.
pub fn read_letter<'a>(
    store: &'a LetterStore,
    user_id: &str,
    id_ref: &str,
    now: DateTime<Utc>,
) -> Result<&'a Letter> {
    let id = resolve_letter_id(store, user_id, id_ref)?;
    let letter = store
        .get(id)
        .ok_or_else(|| CapsuleError::LetterNotFound(id_ref.to_string()))?;

    if letter.locked_at(now) {
        return Err(CapsuleError::LetterLocked {
            id: short_id(letter.id),
            days_left: letter.days_until_delivery(now),
        });
    }

    Ok(letter)
}
