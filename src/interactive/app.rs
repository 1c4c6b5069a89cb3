//! TUI application state and logic

use crate::art::{ArtSheet, Banner};
use crate::core::Letter;
use crate::error::Result as GameResult;
use crate::game::{GameConfig, GameSession, GuessOutcome, SessionStatus};
use crate::output::formatters::outcome_message;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

/// Application state
pub struct App {
    pub config: GameConfig,
    pub screen: Screen,
    pub session: Option<GameSession>,
    pub gallows: Option<ArtSheet>,
    pub banner: Vec<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    /// Create the app on the menu screen
    ///
    /// # Errors
    ///
    /// Returns an error if the start banner cannot be loaded or is too short.
    pub fn new(config: GameConfig, rng: StdRng) -> GameResult<Self> {
        let mut app = Self {
            config,
            screen: Screen::Menu,
            session: None,
            gallows: None,
            banner: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.show_banner(Banner::Start)?;
        app.add_message("Press Enter to start a round.", MessageStyle::Info);
        Ok(app)
    }

    fn show_banner(&mut self, banner: Banner) -> GameResult<()> {
        let sheet = self.config.art.banner(banner)?;
        self.banner = sheet.banner()?.to_vec();
        Ok(())
    }

    /// Pick a word and switch to the play screen
    ///
    /// # Errors
    ///
    /// Returns an error if the word list or gallows cannot be loaded, or the list is empty.
    pub fn start_round(&mut self) -> GameResult<()> {
        let word = self.config.words.pick(&mut self.rng)?;
        self.gallows = Some(self.config.art.gallows()?);
        let session = GameSession::new(
            word,
            self.config.attempts,
            self.config.repeat_policy,
            &mut self.rng,
        );
        self.session = Some(session);
        self.screen = Screen::Playing;
        self.messages.clear();
        self.add_message("New round! Type a letter to guess.", MessageStyle::Info);
        Ok(())
    }

    /// Apply a guess to the running round
    ///
    /// # Errors
    ///
    /// Returns an error if the round ends and its banner cannot be loaded.
    pub fn guess(&mut self, letter: Letter) -> GameResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let outcome = session.guess(letter);
        let style = match outcome {
            GuessOutcome::Hit(_) => MessageStyle::Success,
            GuessOutcome::Miss => MessageStyle::Error,
            GuessOutcome::AlreadyTried | GuessOutcome::RoundOver => MessageStyle::Info,
        };
        let text = outcome_message(&outcome, letter);
        let status = session.status();
        self.add_message(&text, style);

        match status {
            SessionStatus::Won => self.finish_round(Screen::Won)?,
            SessionStatus::Lost => self.finish_round(Screen::Lost)?,
            SessionStatus::AwaitingGuess => {}
        }
        Ok(())
    }

    fn finish_round(&mut self, screen: Screen) -> GameResult<()> {
        self.stats.rounds_played += 1;
        let banner = if screen == Screen::Won {
            self.stats.rounds_won += 1;
            Banner::Win
        } else {
            Banner::Lose
        };
        info!(
            "Round finished ({screen:?}); {} of {} won",
            self.stats.rounds_won, self.stats.rounds_played
        );
        self.show_banner(banner)?;
        self.screen = screen;
        self.add_message(
            "Press Enter for a new round or 'q' to quit.",
            MessageStyle::Info,
        );
        Ok(())
    }

    /// Leave the current round without finishing it
    ///
    /// # Errors
    ///
    /// Returns an error if the start banner cannot be loaded.
    pub fn back_to_menu(&mut self) -> GameResult<()> {
        self.session = None;
        self.show_banner(Banner::Start)?;
        self.screen = Screen::Menu;
        self.add_message("Press Enter to start a round.", MessageStyle::Info);
        Ok(())
    }

    /// React to one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a resource needed for the next screen cannot be loaded.
    pub fn handle_key(&mut self, key: KeyEvent) -> GameResult<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.screen {
            Screen::Menu => match key.code {
                KeyCode::Enter => self.start_round()?,
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Esc => self.back_to_menu()?,
                KeyCode::Char(c) => match Letter::from_char(c) {
                    Some(letter) => self.guess(letter)?,
                    None => {
                        self.add_message("Please enter a single letter A-Z.", MessageStyle::Error);
                    }
                },
                _ => {}
            },
            Screen::Won | Screen::Lost => match key.code {
                KeyCode::Enter => self.start_round()?,
                KeyCode::Esc => self.back_to_menu()?,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, or if a resource error ends the game.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
