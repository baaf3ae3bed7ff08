//! Mood catalog definitions
//!
//! The catalog is fixed: a letter always carries exactly one of these
//! moods, and nothing outside the catalog is representable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood attached to a letter when it is written
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    Calm,
    Reflective,
    Excited,
    Grateful,
    Hopeful,
}

impl Mood {
    /// Every mood in catalog order
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Calm,
        Mood::Reflective,
        Mood::Excited,
        Mood::Grateful,
        Mood::Hopeful,
    ];

    /// Stable identifier, as stored in serialized letters
    pub fn value(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Calm => "calm",
            Mood::Reflective => "reflective",
            Mood::Excited => "excited",
            Mood::Grateful => "grateful",
            Mood::Hopeful => "hopeful",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Calm => "Calm",
            Mood::Reflective => "Reflective",
            Mood::Excited => "Excited",
            Mood::Grateful => "Grateful",
            Mood::Hopeful => "Hopeful",
        }
    }

    /// Emoji shown next to the mood
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Calm => "😌",
            Mood::Reflective => "🤔",
            Mood::Excited => "🤩",
            Mood::Grateful => "🙏",
            Mood::Hopeful => "✨",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "calm" => Ok(Mood::Calm),
            "reflective" => Ok(Mood::Reflective),
            "excited" => Ok(Mood::Excited),
            "grateful" => Ok(Mood::Grateful),
            "hopeful" => Ok(Mood::Hopeful),
            _ => Err(format!(
                "Invalid mood: '{}'. Valid moods are: happy, sad, calm, reflective, excited, grateful, hopeful",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid_moods() {
        assert_eq!(Mood::from_str("happy").unwrap(), Mood::Happy);
        assert_eq!(Mood::from_str("sad").unwrap(), Mood::Sad);
        assert_eq!(Mood::from_str("calm").unwrap(), Mood::Calm);
        assert_eq!(Mood::from_str("reflective").unwrap(), Mood::Reflective);
        assert_eq!(Mood::from_str("excited").unwrap(), Mood::Excited);
        assert_eq!(Mood::from_str("grateful").unwrap(), Mood::Grateful);
        assert_eq!(Mood::from_str("hopeful").unwrap(), Mood::Hopeful);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(Mood::from_str("HAPPY").unwrap(), Mood::Happy);
        assert_eq!(Mood::from_str("Grateful").unwrap(), Mood::Grateful);
        assert_eq!(Mood::from_str("hOpEfUl").unwrap(), Mood::Hopeful);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Mood::from_str("angry").is_err());
        assert!(Mood::from_str("").is_err());

        let err = Mood::from_str("angry").unwrap_err();
        assert!(err.contains("Invalid mood"));
        assert!(err.contains("happy, sad, calm"));
    }

    #[test]
    fn test_display_matches_value() {
        for mood in Mood::ALL {
            assert_eq!(mood.to_string(), mood.value());
        }
    }

    #[test]
    fn test_value_round_trips_through_from_str() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_str(mood.value()).unwrap(), mood);
        }
    }

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(Mood::ALL.len(), 7);
        for mood in Mood::ALL {
            assert!(!mood.emoji().is_empty());
            assert!(!mood.label().is_empty());
        }
    }

    #[test]
    fn test_serde_uses_lowercase_value() {
        let json = serde_json::to_string(&Mood::Reflective).unwrap();
        assert_eq!(json, "\"reflective\"");

        let mood: Mood = serde_json::from_str("\"grateful\"").unwrap();
        assert_eq!(mood, Mood::Grateful);
    }

    #[test]
    fn test_serde_rejects_unknown_mood() {
        let result: Result<Mood, _> = serde_json::from_str("\"angry\"");
        assert!(result.is_err());
    }
}
