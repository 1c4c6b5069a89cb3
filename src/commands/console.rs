//! Console game mode
//!
//! Line-based play on a plain terminal: a menu loop that starts rounds, and a round loop that
//! reads one letter at a time.

use crate::art::Banner;
use crate::core::Letter;
use crate::error::{HangmanError, Result};
use crate::game::{GameConfig, GameSession, SessionStatus};
use crate::output::{
    clear_screen, print_banner, print_frame, print_guess_report, print_loss, print_opening,
    print_win,
};
use colored::Colorize;
use log::{debug, info};
use rand::Rng;
use std::io::{BufRead, Write};
use std::thread;

/// Menu input that ends the program
pub const EXIT_SENTINEL: &str = "99";

/// What the operator asked for at the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    NewRound,
    Exit,
    Unrecognised,
}

impl MenuChoice {
    /// Interpret one menu line: empty starts a round, the sentinel exits
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" => Self::NewRound,
            EXIT_SENTINEL => Self::Exit,
            _ => Self::Unrecognised,
        }
    }
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Won,
    Lost,
}

/// Run the menu loop until the operator exits
///
/// End of input at the menu is a normal exit. End of input during a round is returned as
/// `HangmanError::ReadStreamClosed`.
///
/// # Errors
///
/// Returns an error if a resource cannot be loaded, the word list is empty, a banner is too
/// short, input closes mid-round, or the terminal cannot be written.
pub fn run_console<R, W, G>(config: &GameConfig, reader: &mut R, out: &mut W, rng: &mut G) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    loop {
        clear_screen(out)?;
        let start = config.art.banner(Banner::Start)?;
        print_banner(out, start.banner()?)?;
        write!(out, "{}", "INPUT : ".red())?;
        out.flush()?;

        let Some(line) = read_line(reader)? else {
            debug!("Input closed at menu");
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            MenuChoice::Exit => {
                info!("Exit requested");
                return Ok(());
            }
            MenuChoice::NewRound => {
                play_round(config, reader, out, rng)?;
            }
            MenuChoice::Unrecognised => {
                debug!("Ignoring menu input {:?}", line.trim());
            }
        }
    }
}

/// Play one round from word selection to the win/loss screen
///
/// # Errors
///
/// Returns an error if the word list or art cannot be loaded, the word list is empty, input
/// closes before the round ends, or the terminal cannot be written.
pub fn play_round<R, W, G>(
    config: &GameConfig,
    reader: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<RoundResult>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let word = config.words.pick(rng)?;
    let session = GameSession::new(word, config.attempts, config.repeat_policy, rng);
    play_session(config, session, reader, out)
}

/// Play a round on an already prepared session
///
/// Only the art and pause settings of `config` are used; the word, attempts and
/// opening mask come from `session`.
///
/// # Errors
///
/// Returns an error if the art cannot be loaded, input closes before the round ends, or the
/// terminal cannot be written.
pub fn play_session<R, W>(
    config: &GameConfig,
    mut session: GameSession,
    reader: &mut R,
    out: &mut W,
) -> Result<RoundResult>
where
    R: BufRead,
    W: Write,
{
    clear_screen(out)?;
    let gallows = config.art.gallows()?;
    print_frame(out, gallows.frame(0))?;
    print_opening(out, &session)?;

    while !session.status().is_over() {
        let letter = read_letter(reader, out)?;
        let outcome = session.guess(letter);

        clear_screen(out)?;
        let gallows = config.art.gallows()?;
        print_frame(out, gallows.frame(session.wrong_count() as usize))?;
        print_guess_report(out, &session, letter, &outcome)?;
    }

    let result = if session.status() == SessionStatus::Won {
        RoundResult::Won
    } else {
        RoundResult::Lost
    };

    clear_screen(out)?;
    match result {
        RoundResult::Won => {
            let banner = config.art.banner(Banner::Win)?;
            print_banner(out, banner.banner()?)?;
            print_win(out, session.word())?;
        }
        RoundResult::Lost => {
            let banner = config.art.banner(Banner::Lose)?;
            print_banner(out, banner.banner()?)?;
            print_loss(out, session.word())?;
        }
    }
    out.flush()?;

    if !config.pause.is_zero() {
        thread::sleep(config.pause);
    }
    Ok(result)
}

/// Prompt until the operator enters a single letter
///
/// Invalid input is reported and the prompt repeats with no retry limit.
///
/// # Errors
///
/// Returns `HangmanError::ReadStreamClosed` at end of input, or a terminal error if reading
/// or writing fails.
pub fn read_letter<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Result<Letter> {
    loop {
        write!(out, "Enter a single letter: ")?;
        out.flush()?;

        let line = read_line(reader)?.ok_or(HangmanError::ReadStreamClosed)?;
        match Letter::parse(&line) {
            Ok(letter) => return Ok(letter),
            Err(e) => {
                debug!("Rejected guess input: {e}");
                writeln!(
                    out,
                    "{}",
                    "Invalid input. Please enter a single letter.".red()
                )?;
            }
        }
    }
}

/// Read one line, or `None` at end of input
///
/// Bytes that are not UTF-8 become replacement characters, so they fail validation like any
/// other bad input.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let bytes = reader.read_until(b'\n', &mut buf)?;
    Ok((bytes > 0).then(|| String::from_utf8_lossy(&buf).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RepeatPolicy;
    use crate::wordlists::{WordSource, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;
    use std::time::Duration;

    fn config(words: &[&str], attempts: u32) -> GameConfig {
        GameConfig::default()
            .with_words(WordSource::Inline(words_from_slice(words)))
            .with_attempts(attempts)
            .with_pause(Duration::ZERO)
    }

    fn output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn menu_choice_parsing() {
        assert_eq!(MenuChoice::parse("\n"), MenuChoice::NewRound);
        assert_eq!(MenuChoice::parse("   "), MenuChoice::NewRound);
        assert_eq!(MenuChoice::parse("99\n"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("play"), MenuChoice::Unrecognised);
        assert_eq!(MenuChoice::parse("999"), MenuChoice::Unrecognised);
    }

    #[test]
    fn read_letter_returns_first_valid_letter() {
        let mut reader = Cursor::new("k\n");
        let mut out = Vec::new();
        assert_eq!(read_letter(&mut reader, &mut out).unwrap().as_char(), 'K');
    }

    #[test]
    fn read_letter_reprompts_until_valid() {
        let mut reader = Cursor::new("\nab\n7\n  x \n");
        let mut out = Vec::new();
        assert_eq!(read_letter(&mut reader, &mut out).unwrap().as_char(), 'X');

        let text = output(out);
        assert_eq!(text.matches("Invalid input").count(), 3);
        assert_eq!(text.matches("Enter a single letter").count(), 4);
    }

    #[test]
    fn read_letter_reprompts_after_non_utf8_line() {
        let mut reader = Cursor::new(b"\xff\xfe\n k\n".to_vec());
        let mut out = Vec::new();
        assert_eq!(read_letter(&mut reader, &mut out).unwrap().as_char(), 'K');
        assert_eq!(output(out).matches("Invalid input").count(), 1);
    }

    #[test]
    fn menu_ignores_non_utf8_line() {
        let config = config(&["cat"], 10);
        let mut reader = Cursor::new(b"\xff\n99\n".to_vec());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        run_console(&config, &mut reader, &mut out, &mut rng).unwrap();
        assert_eq!(output(out).matches("INPUT : ").count(), 2);
    }

    #[test]
    fn read_letter_at_end_of_input_is_stream_closed() {
        let mut reader = Cursor::new("12\n");
        let mut out = Vec::new();
        assert!(matches!(
            read_letter(&mut reader, &mut out),
            Err(HangmanError::ReadStreamClosed)
        ));
    }

    #[test]
    fn round_is_won_when_every_letter_found() {
        let config = config(&["cat"], 10);
        let mut reader = Cursor::new("c\na\nt\n");
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        let result = play_round(&config, &mut reader, &mut out, &mut rng).unwrap();
        assert_eq!(result, RoundResult::Won);
        assert!(output(out).contains("You guessed the word: CAT"));
    }

    #[test]
    fn round_is_lost_when_attempts_run_out() {
        let config = config(&["cat"], 1);
        let mut reader = Cursor::new("z\n");
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        let result = play_round(&config, &mut reader, &mut out, &mut rng).unwrap();
        assert_eq!(result, RoundResult::Lost);
        assert!(output(out).contains("The word was: CAT"));
    }

    #[test]
    fn round_with_penalty_policy_loses_on_repeats() {
        let config = config(&["cat"], 2).with_repeat_policy(RepeatPolicy::Penalize);
        let mut reader = Cursor::new("z\nz\n");
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        let result = play_round(&config, &mut reader, &mut out, &mut rng).unwrap();
        assert_eq!(result, RoundResult::Lost);
    }

    #[test]
    fn round_aborts_when_input_closes() {
        let config = config(&["cat"], 10);
        let mut reader = Cursor::new("c\n");
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            play_round(&config, &mut reader, &mut out, &mut rng),
            Err(HangmanError::ReadStreamClosed)
        ));
    }

    #[test]
    fn round_with_empty_word_list_fails() {
        let config = config(&[], 10);
        let mut reader = Cursor::new("a\n");
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            play_round(&config, &mut reader, &mut out, &mut rng),
            Err(HangmanError::EmptySource)
        ));
    }

    #[test]
    fn menu_exits_on_sentinel() {
        let config = config(&["cat"], 10);
        let mut reader = Cursor::new("hello\n99\n");
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        run_console(&config, &mut reader, &mut out, &mut rng).unwrap();
        assert_eq!(output(out).matches("INPUT : ").count(), 2);
    }

    #[test]
    fn menu_exits_quietly_at_end_of_input() {
        let config = config(&["cat"], 10);
        let mut reader = Cursor::new("");
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(run_console(&config, &mut reader, &mut out, &mut rng).is_ok());
    }

    #[test]
    fn menu_plays_rounds_back_to_back() {
        let config = config(&["cat"], 10);
        let mut reader = Cursor::new("\nc\na\nt\n\nz\nc\na\nt\n99\n");
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        run_console(&config, &mut reader, &mut out, &mut rng).unwrap();
        let text = output(out);
        assert_eq!(text.matches("You guessed the word: CAT").count(), 2);
        assert!(text.contains("9 attempts left"));
    }
}
