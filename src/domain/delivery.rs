//! Delivery date references and time arithmetic
//!
//! A delivery reference is what the user types for `--deliver`: a word
//! like "tomorrow", a relative offset like "in 3 weeks", or an explicit
//! date. References are parsed up front and resolved against a base
//! instant, so resolution is deterministic in tests.

use crate::error::{CapsuleError, Result};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc, Weekday};

const MS_PER_DAY: i64 = 86_400_000;

/// Represents a delivery reference that can be resolved to an instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryRef {
    /// Midnight at the start of the next day
    Tomorrow,
    /// Next occurrence of a weekday (strictly after today)
    NextWeekday(Weekday),
    /// Offset from the moment of writing
    In(u32, DelayUnit),
    /// Specific calendar date
    Date(NaiveDate),
}

/// Unit for "in <n> <unit>" references
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayUnit {
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DeliveryRef {
    /// Parse a delivery reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "tomorrow" => Ok(DeliveryRef::Tomorrow),
            _ if normalized.starts_with("next ") => Self::parse_weekday(&normalized[5..])
                .map(DeliveryRef::NextWeekday)
                .ok_or_else(|| CapsuleError::InvalidDeliveryDate(input.to_string())),
            _ if normalized.starts_with("in ") => Self::parse_offset(&normalized[3..])
                .ok_or_else(|| CapsuleError::InvalidDeliveryDate(input.to_string())),
            _ => {
                // Try parsing as DD-MM-YYYY
                NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
                    .map(DeliveryRef::Date)
                    .map_err(|_| CapsuleError::InvalidDeliveryDate(input.to_string()))
            }
        }
    }

    fn parse_weekday(day_str: &str) -> Option<Weekday> {
        match day_str {
            "monday" => Some(Weekday::Mon),
            "tuesday" => Some(Weekday::Tue),
            "wednesday" => Some(Weekday::Wed),
            "thursday" => Some(Weekday::Thu),
            "friday" => Some(Weekday::Fri),
            "saturday" => Some(Weekday::Sat),
            "sunday" => Some(Weekday::Sun),
            _ => None,
        }
    }

    /// Parse the "<n> <unit>" tail of an "in ..." reference
    fn parse_offset(rest: &str) -> Option<DeliveryRef> {
        let mut parts = rest.split_whitespace();
        let count: u32 = parts.next()?.parse().ok()?;
        let unit = match parts.next()? {
            "hour" | "hours" => DelayUnit::Hours,
            "day" | "days" => DelayUnit::Days,
            "week" | "weeks" => DelayUnit::Weeks,
            "month" | "months" => DelayUnit::Months,
            "year" | "years" => DelayUnit::Years,
            _ => return None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(DeliveryRef::In(count, unit))
    }

    /// Resolve this reference to a delivery instant.
    ///
    /// Calendar references (tomorrow, weekdays, explicit dates) resolve to
    /// midnight UTC of that day; "in ..." offsets resolve from `now`.
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let overflow = || CapsuleError::InvalidDeliveryDate(format!("{:?}", self));

        match self {
            DeliveryRef::Tomorrow => {
                Ok(midnight_utc(now.date_naive() + Duration::days(1)))
            }
            DeliveryRef::NextWeekday(target_day) => {
                let today = now.date_naive();
                let current_day = today.weekday();
                // Strictly after today; a week out when today is the target day
                let days_forward = if current_day == *target_day {
                    7
                } else {
                    (target_day.num_days_from_monday() + 7 - current_day.num_days_from_monday()) % 7
                };
                Ok(midnight_utc(today + Duration::days(days_forward as i64)))
            }
            DeliveryRef::In(count, unit) => match unit {
                DelayUnit::Hours => Ok(now + Duration::hours(*count as i64)),
                DelayUnit::Days => Ok(now + Duration::days(*count as i64)),
                DelayUnit::Weeks => Ok(now + Duration::weeks(*count as i64)),
                DelayUnit::Months => now
                    .checked_add_months(Months::new(*count))
                    .ok_or_else(overflow),
                DelayUnit::Years => count
                    .checked_mul(12)
                    .and_then(|months| now.checked_add_months(Months::new(months)))
                    .ok_or_else(overflow),
            },
            DeliveryRef::Date(date) => Ok(midnight_utc(*date)),
        }
    }
}

/// Start of the given day in UTC
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Percentage of elapsed time between creation and scheduled delivery,
/// clamped to [0, 100].
///
/// A schedule that is not after the creation time is treated as
/// immediately complete, so the division below can never see a
/// non-positive total.
pub fn progress_percent(
    created: DateTime<Utc>,
    scheduled: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    if now >= scheduled {
        return 100.0;
    }

    let total = (scheduled - created).num_milliseconds();
    if total <= 0 {
        return 100.0;
    }

    let elapsed = (now - created).num_milliseconds();
    (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Whole days until delivery, rounded up.
///
/// Zero or negative means the letter is deliverable now.
pub fn days_until_delivery(scheduled: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (scheduled - now).num_milliseconds();
    if ms > 0 {
        (ms - 1) / MS_PER_DAY + 1
    } else {
        ms / MS_PER_DAY
    }
}
