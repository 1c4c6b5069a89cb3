//! Reveal mask for the word being guessed
//!
//! A mask mirrors the target word position by position: each cell is either the true letter
//! or [`PLACEHOLDER`]. Cells only ever go from hidden to revealed.

use super::word::Word;
use rand::Rng;
use std::fmt;

/// Symbol shown for a hidden letter; never a valid guess
pub const PLACEHOLDER: u8 = b'_';

/// The visible state of a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    cells: Vec<u8>,
}

impl RevealMask {
    /// A mask for `word` with every position hidden
    #[must_use]
    pub fn hidden(word: &Word) -> Self {
        Self {
            cells: vec![PLACEHOLDER; word.len()],
        }
    }

    /// Number of positions, always equal to the word length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the letter at `position` is visible
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.cells
            .get(position)
            .is_some_and(|&cell| cell != PLACEHOLDER)
    }

    /// Number of visible positions
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != PLACEHOLDER).count()
    }

    /// True once every position shows the word's letter
    #[must_use]
    pub fn is_complete(&self, word: &Word) -> bool {
        self.cells == word.letters()
    }

    /// Raw cell bytes, placeholders included
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn reveal_in_place(&mut self, word: &Word, positions: &[usize]) {
        for &position in positions {
            if let (Some(cell), Some(letter)) =
                (self.cells.get_mut(position), word.letter_at(position))
            {
                *cell = letter;
            }
        }
    }
}

impl fmt::Display for RevealMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            write!(f, "{}", cell as char)?;
        }
        Ok(())
    }
}

/// Number of positions revealed when a round starts: `max(0, len / 2 - 1)`
#[must_use]
pub const fn initial_reveal_count(word_len: usize) -> usize {
    (word_len / 2).saturating_sub(1)
}

/// Build the opening mask for a round
///
/// Draws [`initial_reveal_count`] indices uniformly from `[0, len)` with replacement, so
/// repeated draws can land on the same position and fewer letters may end up visible.
///
/// # Examples
/// ```
/// use hangman::core::{Word, initial_reveal};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let word = Word::new("elephant").unwrap();
/// let mask = initial_reveal(&word, &mut StdRng::seed_from_u64(7));
/// assert_eq!(mask.len(), 8);
/// assert!(mask.revealed_count() <= 3);
/// ```
pub fn initial_reveal<R: Rng>(word: &Word, rng: &mut R) -> RevealMask {
    let draws = initial_reveal_count(word.len());
    let positions: Vec<usize> = (0..draws).map(|_| rng.random_range(0..word.len())).collect();

    let mut mask = RevealMask::hidden(word);
    mask.reveal_in_place(word, &positions);
    mask
}

/// Reveal `positions` of `word` in `mask`
///
/// Positions outside the word are ignored. Already visible positions stay visible.
///
/// # Examples
/// ```
/// use hangman::core::{RevealMask, Word, apply_reveal};
///
/// let word = Word::new("cat").unwrap();
/// let mask = apply_reveal(&word, &[0, 2, 99], RevealMask::hidden(&word));
/// assert_eq!(mask.to_string(), "C_T");
/// ```
#[must_use]
pub fn apply_reveal(word: &Word, positions: &[usize], mut mask: RevealMask) -> RevealMask {
    mask.reveal_in_place(word, positions);
    mask
}
