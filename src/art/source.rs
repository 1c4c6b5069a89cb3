//! Art resources: the gallows sheet and the start/win/loss banners

use super::sheet::ArtSheet;
use crate::error::{HangmanError, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

const EMBEDDED_GALLOWS: &str = include_str!("../../data/art/hangman.txt");
const EMBEDDED_START: &str = include_str!("../../data/art/start.txt");
const EMBEDDED_WIN: &str = include_str!("../../data/art/win.txt");
const EMBEDDED_LOSE: &str = include_str!("../../data/art/lose.txt");

/// Which full-screen banner to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Start,
    Win,
    Lose,
}

impl Banner {
    /// File name of the banner inside an art directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Start => "start.txt",
            Self::Win => "win.txt",
            Self::Lose => "lose.txt",
        }
    }

    const fn embedded(self) -> &'static str {
        match self {
            Self::Start => EMBEDDED_START,
            Self::Win => EMBEDDED_WIN,
            Self::Lose => EMBEDDED_LOSE,
        }
    }
}

/// File name of the gallows sheet inside an art directory
pub const GALLOWS_FILE: &str = "hangman.txt";

/// Where art is loaded from
///
/// Directory sources are read from disk on every load.
#[derive(Debug, Clone, Default)]
pub enum ArtSource {
    /// Art compiled into the binary
    #[default]
    Embedded,
    /// A directory holding `hangman.txt`, `start.txt`, `win.txt` and `lose.txt`
    Directory(PathBuf),
}

impl ArtSource {
    /// Load the gallows sheet
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if a directory source cannot be read.
    pub fn gallows(&self) -> Result<ArtSheet> {
        self.load(GALLOWS_FILE, EMBEDDED_GALLOWS)
    }

    /// Load one of the banner sheets
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if a directory source cannot be read.
    pub fn banner(&self, banner: Banner) -> Result<ArtSheet> {
        self.load(banner.file_name(), banner.embedded())
    }

    fn load(&self, file_name: &str, embedded: &str) -> Result<ArtSheet> {
        let sheet = match self {
            Self::Embedded => ArtSheet::from_text(file_name, embedded),
            Self::Directory(dir) => {
                let path = dir.join(file_name);
                debug!("Reading art from {}", path.display());
                let text = fs::read_to_string(&path)
                    .map_err(|source| HangmanError::ResourceUnavailable { path, source })?;
                ArtSheet::from_text(file_name, &text)
            }
        };
        debug!("Loaded {} ({} lines)", sheet.name(), sheet.lines().len());
        Ok(sheet)
    }
}
