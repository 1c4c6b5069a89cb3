//! Line-oriented ASCII art

use crate::error::{HangmanError, Result};

/// Lines per gallows frame; frame `n` shows the state after `n` wrong guesses
pub const FRAME_HEIGHT: usize = 7;

/// Lines shown for a start, win or loss banner
pub const BANNER_HEIGHT: usize = 16;

/// A loaded art resource, split into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtSheet {
    name: String,
    lines: Vec<String>,
}

impl ArtSheet {
    /// Split `text` into lines; `name` identifies the resource in errors
    #[must_use]
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of complete frames in the sheet
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.lines.len() / FRAME_HEIGHT
    }

    /// The block of lines for `wrong_count` wrong guesses
    ///
    /// Computes `[wrong_count * 7, wrong_count * 7 + 7)` clamped to the sheet, so counts past
    /// the last frame yield a partial or empty slice instead of failing.
    ///
    /// # Examples
    /// ```
    /// use hangman::art::ArtSheet;
    ///
    /// let text = (0..10).map(|i| format!("line {i}\n")).collect::<String>();
    /// let sheet = ArtSheet::from_text("gallows", &text);
    /// assert_eq!(sheet.frame(0).len(), 7);
    /// assert_eq!(sheet.frame(1), &["line 7", "line 8", "line 9"]);
    /// assert!(sheet.frame(5).is_empty());
    /// ```
    #[must_use]
    pub fn frame(&self, wrong_count: usize) -> &[String] {
        let total = self.lines.len();
        let start = wrong_count.saturating_mul(FRAME_HEIGHT).min(total);
        let end = start.saturating_add(FRAME_HEIGHT).min(total);
        &self.lines[start..end]
    }

    /// The first [`BANNER_HEIGHT`] lines of the sheet
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::ResourceTooShort` if the sheet has fewer lines than a banner.
    pub fn banner(&self) -> Result<&[String]> {
        self.lines
            .get(..BANNER_HEIGHT)
            .ok_or_else(|| HangmanError::ResourceTooShort {
                resource: self.name.clone(),
                required: BANNER_HEIGHT,
                found: self.lines.len(),
            })
    }
}
