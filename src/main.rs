//! Hangman - CLI
//!
//! Terminal hangman with a line-based console mode and a full-screen TUI mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    HangmanError,
    art::ArtSource,
    commands::run_console,
    game::{DEFAULT_ATTEMPTS, GameConfig, RepeatPolicy},
    wordlists::WordSource,
};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Directory with hangman.txt, start.txt, win.txt and lose.txt (default: built-in art)
    #[arg(long, global = true)]
    art_dir: Option<PathBuf>,

    /// Attempts at the start of each round
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    attempts: u32,

    /// Seed for the random number generator (reproducible rounds)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Charge an attempt every time a missed letter is guessed again
    #[arg(long, global = true)]
    penalize_repeats: bool,

    /// Seconds to show the win/loss screen in console mode
    #[arg(long, global = true, default_value = "5")]
    pause: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Console game (default)
    Play,

    /// Full-screen terminal interface
    Tui,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let words = self
            .words
            .clone()
            .map_or(WordSource::Embedded, WordSource::File);
        let art = self
            .art_dir
            .clone()
            .map_or(ArtSource::Embedded, ArtSource::Directory);
        let repeat_policy = if self.penalize_repeats {
            RepeatPolicy::Penalize
        } else {
            RepeatPolicy::Ignore
        };

        GameConfig::default()
            .with_words(words)
            .with_art(art)
            .with_attempts(self.attempts)
            .with_repeat_policy(repeat_policy)
            .with_pause(Duration::from_secs(self.pause))
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                debug!("Seeding RNG with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.game_config();
    let rng = cli.rng();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, rng),
        Commands::Tui => run_tui_command(config, rng),
    }
}

fn run_play_command(config: &GameConfig, mut rng: StdRng) -> Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();

    match run_console(config, &mut reader, &mut out, &mut rng) {
        Ok(()) => Ok(()),
        Err(HangmanError::ReadStreamClosed) => {
            info!("Input closed during a round");
            println!("\nInput closed. Goodbye!");
            Ok(())
        }
        Err(e) => Err(e).context("Game aborted"),
    }
}

fn run_tui_command(config: GameConfig, rng: StdRng) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(config, rng).context("Failed to load start screen")?;
    run_tui(app)
}
