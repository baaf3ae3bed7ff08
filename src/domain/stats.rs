//! Aggregate statistics over a user's letters

use crate::domain::Mood;
use std::collections::BTreeMap;

/// Counts computed over one user's letters at a point in time.
///
/// `locked` always equals `upcoming` (one predicate, two names), and
/// `delivered + upcoming == total`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterStats {
    pub total: usize,
    pub delivered: usize,
    pub upcoming: usize,
    pub locked: usize,
    /// Per-mood counts; only moods that occur are present. BTreeMap keeps
    /// iteration order stable for display and tests.
    pub by_mood: BTreeMap<Mood, usize>,
}
