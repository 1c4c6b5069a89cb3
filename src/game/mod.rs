//! Round state and configuration

mod config;
mod session;

pub use config::{DEFAULT_ATTEMPTS, DEFAULT_PAUSE, GameConfig, RepeatPolicy};
pub use session::{GameSession, GuessOutcome, SessionStatus};
