//! Domain layer - Business logic and domain models

pub mod delivery;
pub mod letter;
pub mod mood;
pub mod stats;

pub use delivery::DeliveryRef;
pub use letter::{Letter, LetterDraft, LetterPatch};
pub use mood::Mood;
pub use stats::LetterStats;
