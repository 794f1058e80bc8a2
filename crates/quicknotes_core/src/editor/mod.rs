//! Editor capability seam.
//!
//! # Responsibility
//! - Define the contract an interactive note editor must satisfy.
//! - Keep service orchestration testable without a real terminal.
//!
//! # Invariants
//! - Implementations block until the user signals save-and-exit.
//! - Implementations restore any acquired terminal state on every exit path.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Interactive editing session contract.
///
/// `edit` presents `seed_text` for revision (empty for a fresh note) and
/// returns the final buffer contents once the user signals completion.
pub trait NoteEditor {
    fn edit(&mut self, seed_text: &str) -> Result<String, EditorError>;
}

/// Editor session error.
#[derive(Debug)]
pub enum EditorError {
    /// Terminal or stream failure during the session.
    Io(std::io::Error),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "editor terminal failure: {err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for EditorError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
