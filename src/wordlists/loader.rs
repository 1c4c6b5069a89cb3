//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use crate::error::{HangmanError, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Returns the valid words in file order. Blank lines are skipped silently; lines that are
/// not a single run of ASCII letters are skipped with a warning.
///
/// # Errors
///
/// Returns `HangmanError::ResourceUnavailable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| HangmanError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(content.lines()))
}

/// Convert lines of text to words, skipping blank and invalid lines
pub fn words_from_lines<'a, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("Skipping word list line {}: '{trimmed}' ({e})", index + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}
