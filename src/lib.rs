//! Hangman
//!
//! A terminal word-guessing game: pick a word, reveal letters as they are guessed, and draw a
//! little more of the gallows for every miss.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Letter, Word};
//! use hangman::game::{GameSession, RepeatPolicy, SessionStatus};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let word = Word::new("apple").unwrap();
//! let mut session = GameSession::new(word, 10, RepeatPolicy::Ignore, &mut rng);
//!
//! for c in "aple".chars() {
//!     session.guess(Letter::from_char(c).unwrap());
//! }
//! assert_eq!(session.status(), SessionStatus::Won);
//! ```

// Core domain types
pub mod core;

// Fatal error kinds
pub mod error;

// Word lists
pub mod wordlists;

// Gallows and banner art
pub mod art;

// Round state machine and configuration
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{HangmanError, Result};
