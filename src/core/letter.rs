//! A single guessed letter
//!
//! Guesses are validated once at the input boundary; everything downstream works with `Letter`.

use std::fmt;

/// One uppercase ASCII letter, A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Why a line of operator input was not accepted as a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    Empty,
    TooLong(usize),
    NotALetter(char),
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no letter entered"),
            Self::TooLong(len) => write!(f, "expected a single letter, got {len} characters"),
            Self::NotALetter(c) => write!(f, "'{c}' is not a letter"),
        }
    }
}

impl std::error::Error for InvalidGuess {}

impl Letter {
    /// Build a letter from a character, normalising to uppercase
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Parse one line of operator input
    ///
    /// The input is trimmed and case-normalised; it must then be exactly one letter A-Z.
    ///
    /// # Errors
    /// Returns `InvalidGuess` describing why the input was rejected.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse(" e\n").unwrap().as_char(), 'E');
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("7").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, InvalidGuess> {
        let mut chars = input.trim().chars();
        let Some(first) = chars.next() else {
            return Err(InvalidGuess::Empty);
        };
        if chars.next().is_some() {
            return Err(InvalidGuess::TooLong(input.trim().chars().count()));
        }
        Self::from_char(first).ok_or(InvalidGuess::NotALetter(first))
    }

    /// The letter as an uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
