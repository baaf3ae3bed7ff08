//! capsule - letters to your future self, in your terminal
//!
//! A command-line journaling application: compose letters, tag them with a
//! mood, seal them until a future delivery date, and read them back once
//! that date has passed.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod store;

pub use error::CapsuleError;
