//! Game configuration

use crate::art::ArtSource;
use crate::wordlists::WordSource;
use std::time::Duration;

/// Attempts granted at the start of a round
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// How long the console shows the win/loss screen before returning to the menu
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(5);

/// What a repeated guess costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatPolicy {
    /// A letter already in either history is reported and changes nothing
    #[default]
    Ignore,
    /// Every guess is applied, so a repeated miss costs another attempt
    Penalize,
}

/// Everything a front end needs to run rounds
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub words: WordSource,
    pub art: ArtSource,
    pub attempts: u32,
    pub repeat_policy: RepeatPolicy,
    pub pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: WordSource::default(),
            art: ArtSource::default(),
            attempts: DEFAULT_ATTEMPTS,
            repeat_policy: RepeatPolicy::default(),
            pause: DEFAULT_PAUSE,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_words(mut self, words: WordSource) -> Self {
        self.words = words;
        self
    }

    #[must_use]
    pub fn with_art(mut self, art: ArtSource) -> Self {
        self.art = art;
        self
    }

    #[must_use]
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_repeat_policy(mut self, policy: RepeatPolicy) -> Self {
        self.repeat_policy = policy;
        self
    }

    #[must_use]
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}
