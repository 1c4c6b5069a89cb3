//! Guess evaluation

use super::letter::Letter;
use super::word::Word;

/// Outcome of checking one letter against the target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// The letter occurs at these zero-based positions (never empty, ascending)
    Matched(Vec<usize>),
    NoMatch,
}

impl GuessResult {
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Matched positions, empty for a miss
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        match self {
            Self::Matched(positions) => positions,
            Self::NoMatch => &[],
        }
    }
}

/// Find every position of `letter` in `word`
///
/// # Examples
/// ```
/// use hangman::core::{GuessResult, Letter, Word, evaluate};
///
/// let word = Word::new("apple").unwrap();
/// let p = Letter::from_char('p').unwrap();
/// assert_eq!(evaluate(&word, p), GuessResult::Matched(vec![1, 2]));
/// ```
#[must_use]
pub fn evaluate(word: &Word, letter: Letter) -> GuessResult {
    if word.has_letter(letter.byte()) {
        GuessResult::Matched(word.positions_of(letter.byte()).to_vec())
    } else {
        GuessResult::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn evaluate_single_occurrence() {
        let word = Word::new("cat").unwrap();
        assert_eq!(evaluate(&word, letter('a')), GuessResult::Matched(vec![1]));
    }

    #[test]
    fn evaluate_all_occurrences() {
        let word = Word::new("banana").unwrap();
        assert_eq!(
            evaluate(&word, letter('A')),
            GuessResult::Matched(vec![1, 3, 5])
        );
    }

    #[test]
    fn evaluate_no_match() {
        let word = Word::new("cat").unwrap();
        let result = evaluate(&word, letter('z'));
        assert_eq!(result, GuessResult::NoMatch);
        assert!(!result.is_match());
        assert!(result.positions().is_empty());
    }

    #[test]
    fn evaluate_matches_brute_force_scan() {
        let words = ["mississippi", "zebra", "a", "bookkeeper", "rhythm"];
        for text in words {
            let word = Word::new(text).unwrap();
            for c in 'A'..='Z' {
                let expected: Vec<usize> = word
                    .letters()
                    .iter()
                    .enumerate()
                    .filter(|&(_, &b)| b == c as u8)
                    .map(|(i, _)| i)
                    .collect();
                let result = evaluate(&word, letter(c));
                assert_eq!(result.positions(), expected.as_slice(), "{text} / {c}");
                assert_eq!(result.is_match(), !expected.is_empty());
            }
        }
    }
}
