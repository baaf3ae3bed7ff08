//! Output formatting utilities

use crate::application::short_id;
use crate::domain::{Letter, LetterStats, Mood};
use chrono::{DateTime, Utc};

const BAR_WIDTH: usize = 10;
const TITLE_WIDTH: usize = 28;

/// Format a list of letters for display, one line per letter
pub fn format_letter_list(letters: &[&Letter], now: DateTime<Utc>) -> String {
    if letters.is_empty() {
        return "No letters found".to_string();
    }

    let mut output = String::new();
    for letter in letters {
        output.push_str(&format_letter_line(letter, now));
        output.push('\n');
    }
    output
}

fn format_letter_line(letter: &Letter, now: DateTime<Utc>) -> String {
    let status = if letter.delivered_at(now) {
        "delivered".to_string()
    } else {
        format!(
            "{} {:>3.0}%",
            progress_bar(letter.progress_at(now)),
            letter.progress_at(now)
        )
    };

    format!(
        "{}  {}  {} {:<10}  {:<width$}  {}",
        letter.scheduled_date.format("%d-%m-%Y"),
        short_id(letter.id),
        letter.mood.emoji(),
        letter.mood.value(),
        fit(&letter.title),
        status,
        width = TITLE_WIDTH,
    )
}

/// Render a delivered letter in full
pub fn format_letter(letter: &Letter) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", letter.title));
    output.push_str(&format!(
        "Mood: {} {}\n",
        letter.mood.emoji(),
        letter.mood.label()
    ));
    output.push_str(&format!(
        "Written: {}\n",
        letter.created_at.format("%d-%m-%Y")
    ));
    output.push_str(&format!(
        "Delivery: {}\n",
        letter.scheduled_date.format("%d-%m-%Y")
    ));
    if let Some(image) = &letter.image {
        output.push_str(&format!("Image: {}\n", image));
        if let Some(caption) = &letter.caption {
            output.push_str(&format!("Caption: {}\n", caption));
        }
    }
    output.push('\n');
    output.push_str(&letter.content);
    output.push('\n');

    output
}

/// Format per-user statistics
pub fn format_stats(user_id: &str, stats: &LetterStats) -> String {
    if stats.total == 0 {
        return format!("No letters yet for {}", user_id);
    }

    let mut output = String::new();
    output.push_str(&format!("Letters for {}:\n", user_id));
    output.push_str(&format!("  total      {}\n", stats.total));
    output.push_str(&format!("  delivered  {}\n", stats.delivered));
    output.push_str(&format!("  locked     {}\n", stats.locked));

    output.push_str("\nBy mood:\n");
    for (mood, count) in &stats.by_mood {
        output.push_str(&format!(
            "  {} {:<12}{}\n",
            mood.emoji(),
            mood.value(),
            count
        ));
    }

    output
}

/// Format the mood catalog
pub fn format_mood_list() -> String {
    let mut output = String::new();
    for mood in Mood::ALL {
        output.push_str(&format!(
            "{}  {:<12}{}\n",
            mood.emoji(),
            mood.value(),
            mood.label()
        ));
    }
    output
}

/// ASCII progress bar, e.g. `[======----]`
fn progress_bar(pct: f64) -> String {
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "=".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn fit(title: &str) -> String {
    if title.chars().count() <= TITLE_WIDTH {
        return title.to_string();
    }
    let truncated: String = title.chars().take(TITLE_WIDTH - 3).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn letter(scheduled_offset_days: i64) -> Letter {
        let created = Utc.with_ymd_and_hms(2026, 1, 16, 12, 0, 0).unwrap();
        Letter {
            id: Uuid::new_v4(),
            title: "Dear me".to_string(),
            content: "hello from the past".to_string(),
            mood: Mood::Hopeful,
            scheduled_date: created + Duration::days(scheduled_offset_days),
            created_at: created,
            is_delivered: false,
            user_id: "u1".to_string(),
            image: None,
            caption: None,
            progress: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_empty_list() {
        let letters: Vec<&Letter> = vec![];
        assert_eq!(format_letter_list(&letters, now()), "No letters found");
    }

    #[test]
    fn test_format_list_locked_letter_shows_progress() {
        let letter = letter(10);
        let output = format_letter_list(&[&letter], now());

        assert!(output.contains("26-01-2026"));
        assert!(output.contains("hopeful"));
        assert!(output.contains("Dear me"));
        assert!(output.contains("[----------]"));
        assert!(output.contains("0%"));
    }

    #[test]
    fn test_format_list_delivered_letter() {
        let letter = letter(-1);
        let output = format_letter_list(&[&letter], now());
        assert!(output.contains("delivered"));
        assert!(!output.contains('%'));
    }

    #[test]
    fn test_format_list_shows_short_id() {
        let letter = letter(10);
        let output = format_letter_list(&[&letter], now());
        assert!(output.contains(&short_id(letter.id)));
    }

    #[test]
    fn test_format_letter_full_view() {
        let mut letter = letter(-1);
        letter.image = Some("file:///photos/beach.jpg".to_string());
        letter.caption = Some("Summer".to_string());

        let output = format_letter(&letter);
        assert!(output.starts_with("# Dear me"));
        assert!(output.contains("Mood: ✨ Hopeful"));
        assert!(output.contains("Written: 16-01-2026"));
        assert!(output.contains("Delivery: 15-01-2026"));
        assert!(output.contains("Image: file:///photos/beach.jpg"));
        assert!(output.contains("Caption: Summer"));
        assert!(output.contains("hello from the past"));
    }

    #[test]
    fn test_format_letter_without_image_omits_caption_block() {
        let output = format_letter(&letter(-1));
        assert!(!output.contains("Image:"));
        assert!(!output.contains("Caption:"));
    }

    #[test]
    fn test_format_stats() {
        let mut stats = LetterStats {
            total: 3,
            delivered: 1,
            upcoming: 2,
            locked: 2,
            ..Default::default()
        };
        stats.by_mood.insert(Mood::Happy, 2);
        stats.by_mood.insert(Mood::Hopeful, 1);

        let output = format_stats("alice", &stats);
        assert!(output.contains("Letters for alice"));
        assert!(output.contains("total      3"));
        assert!(output.contains("delivered  1"));
        assert!(output.contains("locked     2"));
        assert!(output.contains("happy"));
        assert!(output.contains("hopeful"));
    }

    #[test]
    fn test_format_stats_empty() {
        let output = format_stats("alice", &LetterStats::default());
        assert_eq!(output, "No letters yet for alice");
    }

    #[test]
    fn test_format_mood_list_has_all_moods() {
        let output = format_mood_list();
        for mood in Mood::ALL {
            assert!(output.contains(mood.value()));
            assert!(output.contains(mood.emoji()));
        }
        assert_eq!(output.lines().count(), 7);
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), "[----------]");
        assert_eq!(progress_bar(50.0), "[=====-----]");
        assert_eq!(progress_bar(100.0), "[==========]");
    }

    #[test]
    fn test_fit_truncates_long_titles() {
        let long = "a".repeat(50);
        let fitted = fit(&long);
        assert_eq!(fitted.chars().count(), TITLE_WIDTH);
        assert!(fitted.ends_with("..."));
    }
}
