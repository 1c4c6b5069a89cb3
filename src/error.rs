//! Errors that end a round or the program

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal hangman errors
///
/// Invalid guesses are not represented here: they are handled by re-prompting.
#[derive(Debug)]
pub enum HangmanError {
    /// A word list or art file could not be opened or read
    ResourceUnavailable { path: PathBuf, source: io::Error },
    /// The word list had no usable entries
    EmptySource,
    /// An art resource has fewer lines than the screen needs
    ResourceTooShort {
        resource: String,
        required: usize,
        found: usize,
    },
    /// Interactive input reached end-of-file
    ReadStreamClosed,
    /// Writing to or driving the terminal failed
    Terminal(io::Error),
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceUnavailable { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::EmptySource => write!(f, "word list contains no usable words"),
            Self::ResourceTooShort {
                resource,
                required,
                found,
            } => write!(
                f,
                "art resource '{resource}' needs at least {required} lines, found {found}"
            ),
            Self::ReadStreamClosed => write!(f, "input stream closed"),
            Self::Terminal(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for HangmanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceUnavailable { source, .. } => Some(source),
            Self::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HangmanError {
    fn from(e: io::Error) -> Self {
        Self::Terminal(e)
    }
}

/// Result alias used across the crate
pub type Result<T, E = HangmanError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn resource_unavailable_mentions_path_and_cause() {
        let err = HangmanError::ResourceUnavailable {
            path: PathBuf::from("missing/words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("missing/words.txt"));
        assert!(message.contains("no such file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn too_short_reports_counts() {
        let err = HangmanError::ResourceTooShort {
            resource: "win".to_string(),
            required: 16,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "art resource 'win' needs at least 16 lines, found 3"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn io_errors_become_terminal_errors() {
        let err: HangmanError = io::Error::other("broken pipe").into();
        assert!(matches!(err, HangmanError::Terminal(_)));
    }
}
