//! A single round of hangman
//!
//! # State Machine
//! `AwaitingGuess` → (hit | miss) → `AwaitingGuess` | `Won` | `Lost`.
//! After every guess the mask is checked before the attempt counter, so a round that is
//! completed with the last attempt still counts as won.

use super::config::RepeatPolicy;
use crate::core::{GuessResult, Letter, RevealMask, Word, apply_reveal, evaluate, initial_reveal};
use log::{debug, info, trace};
use rand::Rng;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    AwaitingGuess,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// What a single guess did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs at these positions, which are now revealed
    Hit(Vec<usize>),
    /// The letter is not in the word; one attempt was spent
    Miss,
    /// The letter was guessed before and the repeat policy ignores it
    AlreadyTried,
    /// The round had already ended; nothing changed
    RoundOver,
}

/// State for one round: target, mask, counters and guess history
#[derive(Debug, Clone)]
pub struct GameSession {
    word: Word,
    mask: RevealMask,
    attempts_left: u32,
    wrong_count: u32,
    correct: Vec<Letter>,
    incorrect: Vec<Letter>,
    repeat_policy: RepeatPolicy,
}

impl GameSession {
    /// Start a round with a randomly pre-revealed mask
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Letter, Word};
    /// use hangman::game::{GameSession, RepeatPolicy, SessionStatus};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let word = Word::new("cat").unwrap();
    /// let mut session = GameSession::new(word, 10, RepeatPolicy::Ignore, &mut StdRng::seed_from_u64(1));
    /// for c in ['c', 'a', 't'] {
    ///     session.guess(Letter::from_char(c).unwrap());
    /// }
    /// assert_eq!(session.status(), SessionStatus::Won);
    /// ```
    pub fn new<R: Rng>(word: Word, attempts: u32, repeat_policy: RepeatPolicy, rng: &mut R) -> Self {
        let mask = initial_reveal(&word, rng);
        debug!(
            "New round: {} letters, {} pre-revealed, {attempts} attempts",
            word.len(),
            mask.revealed_count()
        );
        trace!("Target word: {word}");
        Self::with_mask(word, mask, attempts, repeat_policy)
    }

    /// Start a round from an explicit mask
    #[must_use]
    pub fn with_mask(
        word: Word,
        mask: RevealMask,
        attempts: u32,
        repeat_policy: RepeatPolicy,
    ) -> Self {
        Self {
            word,
            mask,
            attempts_left: attempts,
            wrong_count: 0,
            correct: Vec::new(),
            incorrect: Vec::new(),
            repeat_policy,
        }
    }

    /// Apply one guess and report what it did
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.status().is_over() {
            return GuessOutcome::RoundOver;
        }

        if self.repeat_policy == RepeatPolicy::Ignore && self.already_tried(letter) {
            debug!("Guess {letter}: already tried");
            return GuessOutcome::AlreadyTried;
        }

        let outcome = match evaluate(&self.word, letter) {
            GuessResult::Matched(positions) => {
                self.mask = apply_reveal(&self.word, &positions, self.mask.clone());
                self.correct.push(letter);
                GuessOutcome::Hit(positions)
            }
            GuessResult::NoMatch => {
                self.attempts_left = self.attempts_left.saturating_sub(1);
                self.wrong_count += 1;
                self.incorrect.push(letter);
                GuessOutcome::Miss
            }
        };
        debug!(
            "Guess {letter}: {outcome:?}, mask {}, {} attempts left",
            self.mask, self.attempts_left
        );

        match self.status() {
            SessionStatus::Won => info!("Round won with {} attempts left", self.attempts_left),
            SessionStatus::Lost => info!("Round lost after {} wrong guesses", self.wrong_count),
            SessionStatus::AwaitingGuess => {}
        }
        outcome
    }

    /// Won if the mask shows the whole word, lost if attempts ran out, otherwise waiting
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.mask.is_complete(&self.word) {
            SessionStatus::Won
        } else if self.attempts_left == 0 {
            SessionStatus::Lost
        } else {
            SessionStatus::AwaitingGuess
        }
    }

    /// Whether `letter` appears in either guess history
    #[must_use]
    pub fn already_tried(&self, letter: Letter) -> bool {
        self.correct.contains(&letter) || self.incorrect.contains(&letter)
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn mask(&self) -> &RevealMask {
        &self.mask
    }

    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    #[must_use]
    pub const fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    /// Letters that matched, in guess order
    #[must_use]
    pub fn correct_guesses(&self) -> &[Letter] {
        &self.correct
    }

    /// Letters that missed, in guess order
    #[must_use]
    pub fn incorrect_guesses(&self) -> &[Letter] {
        &self.incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn hidden_session(text: &str, attempts: u32, policy: RepeatPolicy) -> GameSession {
        let word = Word::new(text).unwrap();
        let mask = RevealMask::hidden(&word);
        GameSession::with_mask(word, mask, attempts, policy)
    }

    #[test]
    fn new_session_starts_waiting() {
        let session = hidden_session("cat", 10, RepeatPolicy::Ignore);
        assert_eq!(session.status(), SessionStatus::AwaitingGuess);
        assert_eq!(session.attempts_left(), 10);
        assert_eq!(session.wrong_count(), 0);
        assert!(session.correct_guesses().is_empty());
        assert!(session.incorrect_guesses().is_empty());
    }

    #[test]
    fn hit_reveals_and_keeps_attempts() {
        let mut session = hidden_session("banana", 10, RepeatPolicy::Ignore);
        assert_eq!(session.guess(letter('a')), GuessOutcome::Hit(vec![1, 3, 5]));
        assert_eq!(session.mask().to_string(), "_A_A_A");
        assert_eq!(session.attempts_left(), 10);
        assert_eq!(session.wrong_count(), 0);
        assert_eq!(session.correct_guesses(), &[letter('A')]);
    }

    #[test]
    fn miss_costs_an_attempt() {
        let mut session = hidden_session("cat", 10, RepeatPolicy::Ignore);
        assert_eq!(session.guess(letter('z')), GuessOutcome::Miss);
        assert_eq!(session.attempts_left(), 9);
        assert_eq!(session.wrong_count(), 1);
        assert_eq!(session.incorrect_guesses(), &[letter('Z')]);
        assert_eq!(session.mask().to_string(), "___");
    }

    #[test]
    fn apple_scenario_is_won_with_nine_attempts() {
        let mut session = hidden_session("apple", 10, RepeatPolicy::Ignore);
        session.guess(letter('A'));
        session.guess(letter('P'));
        session.guess(letter('Z'));
        assert_eq!(session.attempts_left(), 9);
        assert_eq!(session.wrong_count(), 1);
        session.guess(letter('L'));
        assert_eq!(session.status(), SessionStatus::AwaitingGuess);
        session.guess(letter('E'));

        assert_eq!(session.mask().to_string(), "APPLE");
        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.attempts_left(), 9);
    }

    #[test]
    fn single_attempt_miss_is_lost() {
        let mut session = hidden_session("cat", 1, RepeatPolicy::Ignore);
        assert_eq!(session.guess(letter('Z')), GuessOutcome::Miss);
        assert_eq!(session.attempts_left(), 0);
        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(session.word().text(), "CAT");
    }

    #[test]
    fn completing_word_on_last_attempt_wins() {
        let mut session = hidden_session("ab", 1, RepeatPolicy::Ignore);
        session.guess(letter('a'));
        session.guess(letter('b'));
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn guesses_after_round_end_change_nothing() {
        let mut session = hidden_session("cat", 1, RepeatPolicy::Ignore);
        session.guess(letter('z'));
        assert_eq!(session.guess(letter('c')), GuessOutcome::RoundOver);
        assert_eq!(session.mask().to_string(), "___");
        assert_eq!(session.attempts_left(), 0);
    }

    #[test]
    fn ignore_policy_does_not_repenalize_misses() {
        let mut session = hidden_session("cat", 10, RepeatPolicy::Ignore);
        session.guess(letter('z'));
        assert_eq!(session.guess(letter('z')), GuessOutcome::AlreadyTried);
        assert_eq!(session.attempts_left(), 9);
        assert_eq!(session.wrong_count(), 1);
        assert_eq!(session.incorrect_guesses().len(), 1);
    }

    #[test]
    fn ignore_policy_reports_repeated_hits() {
        let mut session = hidden_session("cat", 10, RepeatPolicy::Ignore);
        session.guess(letter('c'));
        assert_eq!(session.guess(letter('C')), GuessOutcome::AlreadyTried);
        assert_eq!(session.correct_guesses().len(), 1);
    }

    #[test]
    fn penalize_policy_repenalizes_misses() {
        let mut session = hidden_session("cat", 10, RepeatPolicy::Penalize);
        session.guess(letter('z'));
        assert_eq!(session.guess(letter('z')), GuessOutcome::Miss);
        assert_eq!(session.attempts_left(), 8);
        assert_eq!(session.wrong_count(), 2);
        assert_eq!(session.incorrect_guesses(), &[letter('Z'), letter('Z')]);
    }

    #[test]
    fn penalize_policy_repeated_hit_is_idempotent() {
        let mut session = hidden_session("cat", 10, RepeatPolicy::Penalize);
        session.guess(letter('a'));
        let before = session.mask().clone();
        assert_eq!(session.guess(letter('a')), GuessOutcome::Hit(vec![1]));
        assert_eq!(session.mask(), &before);
        assert_eq!(session.attempts_left(), 10);
        assert_eq!(session.correct_guesses().len(), 2);
    }

    #[test]
    fn pre_revealed_letter_can_still_be_guessed() {
        let word = Word::new("apple").unwrap();
        let mask = apply_reveal(&word, &[0], RevealMask::hidden(&word));
        let mut session = GameSession::with_mask(word, mask, 10, RepeatPolicy::Ignore);
        assert_eq!(session.guess(letter('a')), GuessOutcome::Hit(vec![0]));
        assert_eq!(session.attempts_left(), 10);
    }

    #[test]
    fn random_session_mask_matches_word() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let word = Word::new("notebook").unwrap();
        let session =
            GameSession::new(word, 10, RepeatPolicy::Ignore, &mut StdRng::seed_from_u64(5));
        assert_eq!(session.mask().len(), 8);
        assert_eq!(session.status(), SessionStatus::AwaitingGuess);
    }
}
