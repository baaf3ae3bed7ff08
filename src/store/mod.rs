//! Letter store - sole authority over the letter collection
//!
//! All reads and writes go through [`LetterStore`]. Mutations apply to
//! the in-memory collection first and are then persisted through the
//! injected storage backend; a failed save never rolls the collection
//! back, it is recorded in `last_error` and returned to the caller.
//!
//! Delivery classification is recomputed from the clock on every query.
//! Callers pass `now` explicitly so behavior at the delivery boundary is
//! testable.

use crate::domain::{delivery, Letter, LetterDraft, LetterPatch, LetterStats, Mood};
use crate::error::{CapsuleError, Result};
use crate::infrastructure::LetterStorage;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Result of a bulk import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportOutcome {
    pub imported: usize,
    /// Records dropped for failing the validity filter or colliding with
    /// an existing id
    pub skipped: usize,
}

/// Owns the letter collection and its persistence
pub struct LetterStore {
    letters: Vec<Letter>,
    storage: Box<dyn LetterStorage>,
    last_error: Option<String>,
}

impl LetterStore {
    /// Hydrate a store from the given backend. No prior state means an
    /// empty collection; a corrupt or unreadable collection is an error
    /// for the caller to handle.
    pub fn open(storage: Box<dyn LetterStorage>) -> Result<Self> {
        let letters = storage.load()?.unwrap_or_default();
        Ok(LetterStore {
            letters,
            storage,
            last_error: None,
        })
    }

    /// Number of letters across all users
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Most recent persistence failure, if any. Cleared at the start of
    /// every mutating call.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Seal a new letter. Assigns a fresh id, stamps the creation time,
    /// and snapshots the derived delivery state.
    pub fn add(&mut self, draft: LetterDraft, now: DateTime<Utc>) -> Result<Uuid> {
        self.last_error = None;

        let id = Uuid::new_v4();
        let letter = Letter {
            id,
            title: draft.title,
            content: draft.content,
            mood: draft.mood,
            scheduled_date: draft.scheduled_date,
            created_at: now,
            is_delivered: now >= draft.scheduled_date,
            user_id: draft.user_id,
            image: draft.image,
            caption: draft.caption,
            progress: Some(delivery::progress_percent(now, draft.scheduled_date, now)),
        };

        self.letters.push(letter);
        self.persist()?;
        Ok(id)
    }

    /// Merge a partial update into an existing letter and refresh the
    /// progress snapshot. Unknown ids are an explicit error.
    pub fn update(&mut self, id: Uuid, patch: LetterPatch, now: DateTime<Utc>) -> Result<()> {
        self.last_error = None;

        let letter = self
            .letters
            .iter_mut()
            .find(|letter| letter.id == id)
            .ok_or_else(|| CapsuleError::LetterNotFound(id.to_string()))?;

        if let Some(title) = patch.title {
            letter.title = title;
        }
        if let Some(content) = patch.content {
            letter.content = content;
        }
        if let Some(mood) = patch.mood {
            letter.mood = mood;
        }
        if let Some(scheduled_date) = patch.scheduled_date {
            letter.scheduled_date = scheduled_date;
        }
        if let Some(user_id) = patch.user_id {
            letter.user_id = user_id;
        }
        if let Some(image) = patch.image {
            letter.image = Some(image);
        }
        if let Some(caption) = patch.caption {
            letter.caption = Some(caption);
        }
        if let Some(is_delivered) = patch.is_delivered {
            letter.is_delivered = is_delivered;
        }
        letter.progress = Some(letter.progress_at(now));

        self.persist()
    }

    /// Remove a letter. Returns whether anything was removed; deleting an
    /// absent id is a no-op.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        self.last_error = None;

        let before = self.letters.len();
        self.letters.retain(|letter| letter.id != id);
        if self.letters.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Look up a letter by id
    pub fn get(&self, id: Uuid) -> Option<&Letter> {
        self.letters.iter().find(|letter| letter.id == id)
    }

    /// All of a user's letters, in insertion order
    pub fn letters_by_user(&self, user_id: &str) -> Vec<&Letter> {
        self.letters
            .iter()
            .filter(|letter| letter.user_id == user_id)
            .collect()
    }

    /// Letters whose delivery date has passed (or whose stored flag says
    /// delivered)
    pub fn delivered_letters(&self, user_id: &str, now: DateTime<Utc>) -> Vec<&Letter> {
        self.letters
            .iter()
            .filter(|letter| letter.user_id == user_id && letter.delivered_at(now))
            .collect()
    }

    /// Letters still waiting for their delivery date
    pub fn upcoming_letters(&self, user_id: &str, now: DateTime<Utc>) -> Vec<&Letter> {
        self.letters
            .iter()
            .filter(|letter| letter.user_id == user_id && letter.locked_at(now))
            .collect()
    }

    /// Alias of [`LetterStore::upcoming_letters`]; "locked" and
    /// "upcoming" name the same predicate
    pub fn locked_letters(&self, user_id: &str, now: DateTime<Utc>) -> Vec<&Letter> {
        self.upcoming_letters(user_id, now)
    }

    /// Case-insensitive substring search over title, content, and caption
    pub fn search(&self, user_id: &str, query: &str) -> Vec<&Letter> {
        let needle = query.to_lowercase();
        self.letters
            .iter()
            .filter(|letter| letter.user_id == user_id && letter.matches(&needle))
            .collect()
    }

    /// Letters with exactly the given mood
    pub fn letters_by_mood(&self, user_id: &str, mood: Mood) -> Vec<&Letter> {
        self.letters
            .iter()
            .filter(|letter| letter.user_id == user_id && letter.mood == mood)
            .collect()
    }

    /// Letters whose scheduled date falls within [start, end] inclusive
    pub fn letters_by_date_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<&Letter> {
        self.letters
            .iter()
            .filter(|letter| {
                letter.user_id == user_id
                    && letter.scheduled_date >= start
                    && letter.scheduled_date <= end
            })
            .collect()
    }

    /// Aggregate counts over a user's letters
    pub fn stats(&self, user_id: &str, now: DateTime<Utc>) -> LetterStats {
        let mut stats = LetterStats::default();

        for letter in self.letters.iter().filter(|l| l.user_id == user_id) {
            stats.total += 1;
            if letter.delivered_at(now) {
                stats.delivered += 1;
            } else {
                stats.upcoming += 1;
            }
            *stats.by_mood.entry(letter.mood).or_insert(0) += 1;
        }
        stats.locked = stats.upcoming;

        stats
    }

    /// A user's letters, cloned for handing outside the store
    pub fn export_letters(&self, user_id: &str) -> Vec<Letter> {
        self.letters
            .iter()
            .filter(|letter| letter.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Append foreign letters to the collection.
    ///
    /// Records with a blank title, content, or user are skipped, as are
    /// records whose id already exists (id uniqueness holds for the
    /// lifetime of the store).
    pub fn import_letters(&mut self, letters: Vec<Letter>) -> Result<ImportOutcome> {
        self.last_error = None;

        let mut outcome = ImportOutcome::default();
        for letter in letters {
            let valid = !letter.title.is_empty()
                && !letter.content.is_empty()
                && !letter.user_id.is_empty();
            if !valid || self.get(letter.id).is_some() {
                outcome.skipped += 1;
                continue;
            }
            self.letters.push(letter);
            outcome.imported += 1;
        }

        if outcome.imported > 0 {
            self.persist()?;
        }
        log::info!(
            "imported {} letters, skipped {}",
            outcome.imported,
            outcome.skipped
        );
        Ok(outcome)
    }

    /// Remove every letter, for all users
    pub fn clear(&mut self) -> Result<()> {
        self.last_error = None;
        self.letters.clear();
        self.persist()
    }

    /// Push the collection to storage. On failure the in-memory state is
    /// kept as-is; the error is logged, recorded, and returned.
    fn persist(&mut self) -> Result<()> {
        if let Err(e) = self.storage.save(&self.letters) {
            log::warn!("failed to persist letter collection: {}", e);
            self.last_error = Some(e.to_string());
            return Err(e);
        }
        Ok(())
    }
}
