//! Letter entity and derived state

use crate::domain::delivery;
use crate::domain::Mood;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A letter scheduled for future delivery.
///
/// Serialized field names match the persisted record format
/// (camelCase); timestamps are RFC 3339 strings, lossless well past
/// millisecond precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub scheduled_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Cache only; delivery classification always consults the clock too
    pub is_delivered: bool,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub caption: Option<String>,
    /// Snapshot taken at the last mutation; live value comes from
    /// [`Letter::progress_at`]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub progress: Option<f64>,
}

impl Letter {
    /// A letter is delivered once its scheduled date has passed, or when
    /// the stored flag says so. The flag can only widen the delivered
    /// set, so classification never flips back.
    pub fn delivered_at(&self, now: DateTime<Utc>) -> bool {
        self.is_delivered || now >= self.scheduled_date
    }

    /// Locked is the complement of delivered
    pub fn locked_at(&self, now: DateTime<Utc>) -> bool {
        !self.delivered_at(now)
    }

    /// Live progress percentage in [0, 100]
    pub fn progress_at(&self, now: DateTime<Utc>) -> f64 {
        delivery::progress_percent(self.created_at, self.scheduled_date, now)
    }

    /// Whole days until delivery, rounded up; zero or negative means
    /// deliverable now
    pub fn days_until_delivery(&self, now: DateTime<Utc>) -> i64 {
        delivery::days_until_delivery(self.scheduled_date, now)
    }

    /// Case-insensitive substring match against title, content, and
    /// caption. `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .caption
                .as_ref()
                .is_some_and(|caption| caption.to_lowercase().contains(needle))
    }
}

/// Everything the author provides when writing a letter; the store fills
/// in id, creation time, and derived state.
#[derive(Debug, Clone)]
pub struct LetterDraft {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub scheduled_date: DateTime<Utc>,
    pub user_id: String,
    pub image: Option<String>,
    pub caption: Option<String>,
}

/// Partial update for an existing letter.
///
/// Everything except id and creation time is patchable; `None` leaves a
/// field untouched.
#[derive(Debug, Clone, Default)]
pub struct LetterPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<Mood>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
    pub image: Option<String>,
    pub caption: Option<String>,
    pub is_delivered: Option<bool>,
}

impl LetterPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.mood.is_none()
            && self.scheduled_date.is_none()
            && self.user_id.is_none()
            && self.image.is_none()
            && self.caption.is_none()
            && self.is_delivered.is_none()
    }
}
