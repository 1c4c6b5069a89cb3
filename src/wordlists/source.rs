//! Where round targets come from

use super::embedded::WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use crate::error::{HangmanError, Result};
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::PathBuf;

/// A supplier of candidate words
///
/// File sources are re-read on every [`WordSource::load`], so edits to the list take effect
/// on the next round.
#[derive(Debug, Clone, Default)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A newline-delimited file on disk
    File(PathBuf),
    /// An in-memory list
    Inline(Vec<Word>),
}

impl WordSource {
    /// Load the current list of candidates
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if a file source cannot be read.
    pub fn load(&self) -> Result<Vec<Word>> {
        let words = match self {
            Self::Embedded => words_from_slice(WORDS),
            Self::File(path) => {
                let words = load_from_file(path)?;
                info!("Loaded {} words from {}", words.len(), path.display());
                words
            }
            Self::Inline(words) => words.clone(),
        };
        debug!("Word source {} yielded {} candidates", self.describe(), words.len());
        Ok(words)
    }

    /// Load the list and pick one target uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if the source cannot be read, or `EmptySource` if it
    /// holds no usable words.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Result<Word> {
        let words = self.load()?;
        pick_random_word(&words, rng).cloned()
    }

    fn describe(&self) -> String {
        match self {
            Self::Embedded => "embedded".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Inline(_) => "inline".to_string(),
        }
    }
}

/// Pick one word uniformly at random
///
/// # Errors
///
/// Returns `HangmanError::EmptySource` if `words` is empty.
///
/// # Examples
/// ```
/// use hangman::wordlists::{loader::words_from_slice, pick_random_word};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let words = words_from_slice(&["apple", "melon"]);
/// let picked = pick_random_word(&words, &mut StdRng::seed_from_u64(3)).unwrap();
/// assert!(words.contains(picked));
/// ```
pub fn pick_random_word<'a, R: Rng>(words: &'a [Word], rng: &mut R) -> Result<&'a Word> {
    words.choose(rng).ok_or(HangmanError::EmptySource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pick_from_empty_list_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = pick_random_word(&[], &mut rng);
        assert!(matches!(result, Err(HangmanError::EmptySource)));
    }

    #[test]
    fn pick_from_single_word_list() {
        let words = words_from_slice(&["apple"]);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            assert_eq!(pick_random_word(&words, &mut rng).unwrap().text(), "APPLE");
        }
    }

    #[test]
    fn picks_are_members_and_roughly_uniform() {
        let words = words_from_slice(&["ant", "bee", "cow", "dog", "eel"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 5];
        let samples = 50_000;

        for _ in 0..samples {
            let picked = pick_random_word(&words, &mut rng).unwrap();
            let index = words.iter().position(|w| w == picked).unwrap();
            counts[index] += 1;
        }

        let expected = samples / words.len();
        for count in counts {
            // Within 5% of the uniform expectation
            assert!(count.abs_diff(expected) < expected / 20, "{counts:?}");
        }
    }

    #[test]
    fn embedded_source_loads_default_list() {
        let words = WordSource::Embedded.load().unwrap();
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn inline_source_picks_from_its_words() {
        let source = WordSource::Inline(words_from_slice(&["cat"]));
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(source.pick(&mut rng).unwrap().text(), "CAT");
    }

    #[test]
    fn empty_inline_source_is_empty_error() {
        let source = WordSource::Inline(Vec::new());
        let mut rng = StdRng::seed_from_u64(9);
        assert!(matches!(source.pick(&mut rng), Err(HangmanError::EmptySource)));
    }

    #[test]
    fn missing_file_source_is_unavailable() {
        let source = WordSource::File(PathBuf::from("/definitely/not/here/words.txt"));
        let mut rng = StdRng::seed_from_u64(9);
        assert!(matches!(
            source.pick(&mut rng),
            Err(HangmanError::ResourceUnavailable { .. })
        ));
    }

    #[test]
    fn file_source_is_reread_each_load() {
        let path = std::env::temp_dir().join("hangman_source_reread.txt");
        std::fs::write(&path, "first\n").unwrap();
        let source = WordSource::File(path.clone());
        assert_eq!(source.load().unwrap()[0].text(), "FIRST");

        std::fs::write(&path, "second\n").unwrap();
        assert_eq!(source.load().unwrap()[0].text(), "SECOND");

        let _ = std::fs::remove_file(&path);
    }
}
