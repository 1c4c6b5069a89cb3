//! Word lists for hangman
//!
//! Provides the embedded default word list, file loading and random target selection.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{WordSource, pick_random_word};
