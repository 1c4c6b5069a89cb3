//! Core domain types for hangman
//!
//! This module contains the fundamental gameplay types and pure functions.
//! Randomness is always supplied by the caller.

mod guess;
mod letter;
mod mask;
mod word;

pub use guess::{GuessResult, evaluate};
pub use letter::{InvalidGuess, Letter};
pub use mask::{PLACEHOLDER, RevealMask, apply_reveal, initial_reveal, initial_reveal_count};
pub use word::{Word, WordError};
