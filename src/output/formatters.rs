//! Formatting utilities for terminal output

use crate::core::Letter;
use crate::game::GuessOutcome;

/// Space-separated guess history, e.g. `"A P L"`
#[must_use]
pub fn format_history(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line summary of a guess for the status line
#[must_use]
pub fn outcome_message(outcome: &GuessOutcome, letter: Letter) -> String {
    match outcome {
        GuessOutcome::Hit(positions) if positions.len() == 1 => {
            format!("Letter {letter} found.")
        }
        GuessOutcome::Hit(positions) => format!("Letter {letter} found {} times.", positions.len()),
        GuessOutcome::Miss => format!("Letter {letter} not found."),
        GuessOutcome::AlreadyTried => format!("You already tried {letter}."),
        GuessOutcome::RoundOver => "The round is over.".to_string(),
    }
}

/// Pluralised attempts counter
#[must_use]
pub fn attempts_label(attempts: u32) -> String {
    if attempts == 1 {
        "1 attempt left".to_string()
    } else {
        format!("{attempts} attempts left")
    }
}
