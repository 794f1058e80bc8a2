//! Note composition/revision use-case service.
//!
//! # Responsibility
//! - Drive one editor session and persist its result through the repository.
//! - Resolve abbreviated uids to a revision target before editing.
//!
//! # Invariants
//! - Trailing whitespace is trimmed from the gathered text before persisting.
//! - An empty trimmed body is still saved; no validation rejects empty notes.
//! - `revise` seeds the editor with the first prefix match but the persist
//!   step updates every prefix match, same as a direct `edit_note` call.

use crate::editor::{EditorError, NoteEditor};
use crate::model::note::Note;
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note editing use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// No note matched the requested uid prefix.
    NoteNotFound(String),
    /// Editor session failure.
    Editor(EditorError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(uid) => write!(f, "no note with uid '{uid}'"),
            Self::Editor(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoteNotFound(_) => None,
            Self::Editor(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<EditorError> for NoteServiceError {
    fn from(value: EditorError) -> Self {
        Self::Editor(value)
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Facade wiring one editor implementation to one repository.
pub struct NoteService<R: NoteRepository, E: NoteEditor> {
    repo: R,
    editor: E,
}

impl<R: NoteRepository, E: NoteEditor> NoteService<R, E> {
    /// Creates a service over the provided repository and editor.
    pub fn new(repo: R, editor: E) -> Self {
        Self { repo, editor }
    }

    /// Composes a new note: empty editor seed, then `add_note`.
    pub fn compose(&mut self, title: &str) -> Result<Note, NoteServiceError> {
        let gathered = self.editor.edit("")?;
        let note = self.repo.add_note(title, gathered.trim_end())?;
        info!(
            "event=note_compose module=service status=ok uid={}",
            note.uid
        );
        Ok(note)
    }

    /// Revises an existing note found by abbreviated uid.
    ///
    /// The editor is seeded with the first match's current body; the trimmed
    /// result replaces the body of every note matching the prefix.
    pub fn revise(&mut self, uid: &str) -> Result<usize, NoteServiceError> {
        let matches = self.repo.search_notes(None, Some(uid))?;
        let Some(target) = matches.first() else {
            return Err(NoteServiceError::NoteNotFound(uid.to_string()));
        };

        let gathered = self.editor.edit(&target.text)?;
        let changed = self.repo.edit_note(uid, gathered.trim_end())?;
        info!(
            "event=note_revise module=service status=ok uid_query={} changed={}",
            uid, changed
        );
        Ok(changed)
    }
}
