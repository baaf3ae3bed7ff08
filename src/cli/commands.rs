//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "capsule")]
#[command(about = "Letters to your future self, in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Act as this user instead of the configured one
    #[arg(long, global = true, value_name = "USER_ID")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new capsule
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a letter to your future self
    Write {
        /// Letter title
        #[arg(short, long)]
        title: String,

        /// Mood (happy, sad, calm, reflective, excited, grateful, hopeful)
        #[arg(long)]
        mood: String,

        /// When the letter unlocks (tomorrow, next friday, in 6 months, DD-MM-YYYY)
        #[arg(short, long, value_name = "WHEN")]
        deliver: String,

        /// Letter body; opens your editor when omitted
        #[arg(short, long)]
        message: Option<String>,

        /// Reference to an attached picture
        #[arg(long, value_name = "URI")]
        image: Option<String>,

        /// Short text accompanying the picture
        #[arg(long)]
        caption: Option<String>,
    },

    /// List your letters
    List {
        /// Only letters whose delivery date has passed
        #[arg(long, conflicts_with = "locked")]
        delivered: bool,

        /// Only letters still waiting for delivery
        #[arg(long)]
        locked: bool,

        /// Only letters with this mood
        #[arg(long)]
        mood: Option<String>,

        /// Only letters scheduled on or after this day (DD-MM-YYYY)
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// Only letters scheduled on or before this day (DD-MM-YYYY)
        #[arg(long, value_name = "DATE")]
        to: Option<String>,

        /// Show at most this many letters
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Read a delivered letter
    Read {
        /// Letter id or unique prefix
        id: String,
    },

    /// Edit a letter
    Edit {
        /// Letter id or unique prefix
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        mood: Option<String>,

        /// Reschedule delivery (tomorrow, next friday, in 6 months, DD-MM-YYYY)
        #[arg(short, long, value_name = "WHEN")]
        deliver: Option<String>,

        /// Replace the letter body
        #[arg(short, long)]
        message: Option<String>,

        #[arg(long, value_name = "URI")]
        image: Option<String>,

        #[arg(long)]
        caption: Option<String>,
    },

    /// Delete a letter
    Delete {
        /// Letter id or unique prefix
        id: String,
    },

    /// Search letters by title, body, or caption
    Search {
        query: String,
    },

    /// Show letter statistics
    Stats,

    /// Show the mood catalog
    Moods,

    /// Export your letters as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Import letters from a JSON export
    Import {
        /// JSON file produced by 'capsule export'
        file: PathBuf,
    },

    /// Delete every letter, for every user
    Clear {
        /// Actually do it
        #[arg(long)]
        force: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
