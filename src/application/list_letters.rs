//! List letters use case

use crate::domain::{delivery, Letter, Mood};
use crate::store::LetterStore;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Which delivery state to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListScope {
    #[default]
    All,
    Delivered,
    Locked,
}

/// Filters applied on top of the scope
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub scope: ListScope,
    pub mood: Option<Mood>,
    /// Keep letters scheduled on or after this day
    pub from: Option<NaiveDate>,
    /// Keep letters scheduled on or before this day
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

/// List a user's letters with optional mood, date range, and limit.
/// Order is insertion order, oldest first.
pub fn list_letters<'a>(
    store: &'a LetterStore,
    user_id: &str,
    filter: &ListFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Letter> {
    let mut letters = match filter.scope {
        ListScope::All => store.letters_by_user(user_id),
        ListScope::Delivered => store.delivered_letters(user_id, now),
        ListScope::Locked => store.locked_letters(user_id, now),
    };

    if let Some(mood) = filter.mood {
        letters.retain(|letter| letter.mood == mood);
    }
    if let Some(from) = filter.from {
        let start = delivery::midnight_utc(from);
        letters.retain(|letter| letter.scheduled_date >= start);
    }
    if let Some(to) = filter.to {
        // Inclusive of the whole end day
        let end = delivery::midnight_utc(to) + Duration::days(1);
        letters.retain(|letter| letter.scheduled_date < end);
    }
    if let Some(n) = filter.limit {
        letters.truncate(n);
    }

    letters
}

/// Search a user's letters; thin pass-through kept beside the other
/// listing entry points.
pub fn search_letters<'a>(store: &'a LetterStore, user_id: &str, query: &str) -> Vec<&'a Letter> {
    store.search(user_id, query)
}
