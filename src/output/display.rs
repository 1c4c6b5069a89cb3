//! Display functions for the console game

use super::formatters::{attempts_label, format_history, outcome_message};
use crate::core::{Letter, Word};
use crate::game::{GameSession, GuessOutcome};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Clear the terminal and move the cursor home
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}

/// Print a start/win/loss banner
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_banner<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.red())?;
    }
    Ok(())
}

/// Print one gallows frame
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_frame<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.blue())?;
    }
    Ok(())
}

/// Print the masked word on its own, as shown when a round opens
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_opening<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(
        out,
        "Guess the word: {} ({})",
        session.mask().to_string().bold(),
        attempts_label(session.attempts_left())
    )
}

/// Print the result of a guess followed by the round state
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_guess_report<W: Write>(
    out: &mut W,
    session: &GameSession,
    letter: Letter,
    outcome: &GuessOutcome,
) -> io::Result<()> {
    let status = format!(
        "{} {}",
        outcome_message(outcome, letter),
        attempts_label(session.attempts_left())
    );
    let status = match outcome {
        GuessOutcome::Hit(_) => status.green(),
        GuessOutcome::Miss => status.red(),
        GuessOutcome::AlreadyTried | GuessOutcome::RoundOver => status.yellow(),
    };
    writeln!(out, "{status}")?;
    writeln!(out, "Word: {}", session.mask().to_string().bold())?;
    writeln!(
        out,
        "Wrong letters: {}",
        format_history(session.incorrect_guesses()).red()
    )?;
    writeln!(
        out,
        "Right letters: {}",
        format_history(session.correct_guesses()).green()
    )
}

/// Print the closing line of a won round
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_win<W: Write>(out: &mut W, word: &Word) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Congratulations! You guessed the word: {word}")
            .yellow()
            .bold()
    )
}

/// Print the closing line of a lost round
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_loss<W: Write>(out: &mut W, word: &Word) -> io::Result<()> {
    writeln!(out, "{}", format!("The word was: {word}").red().bold())
}
