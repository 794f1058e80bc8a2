//! Note repository contract and JSON-store implementation.
//!
//! # Responsibility
//! - Provide note-specific persistence APIs on top of [`DocumentStore`].
//! - Own the matching rules: title substring and abbreviated-uid prefix.
//!
//! # Invariants
//! - `search_notes` requires exactly one usable selector; a uid that is
//!   non-empty after trimming takes precedence over a title.
//! - `edit_note` stamps `updated` on every prefix match and reports the
//!   match count; zero matches is a silent no-op.
//! - Results preserve store insertion order.

use crate::model::note::Note;
use crate::store::{DocumentStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Neither a usable title nor a usable uid was supplied to a search.
    MissingQuery,
    /// Store-layer failure.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingQuery => write!(f, "please provide a title or uid to search notes"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingQuery => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for note operations.
pub trait NoteRepository {
    /// Creates one note and returns the persisted record.
    fn add_note(&mut self, title: &str, text: &str) -> RepoResult<Note>;
    /// Searches by title substring or abbreviated uid; see module docs.
    fn search_notes(&self, title: Option<&str>, uid: Option<&str>) -> RepoResult<Vec<Note>>;
    /// Replaces the body of every note matching the uid prefix.
    fn edit_note(&mut self, uid: &str, text: &str) -> RepoResult<usize>;
    /// Returns every note, unfiltered.
    fn all_notes(&self) -> RepoResult<Vec<Note>>;
}

/// JSON-store-backed note repository.
pub struct JsonNoteRepository<'store> {
    store: &'store mut DocumentStore<Note>,
}

impl<'store> JsonNoteRepository<'store> {
    /// Constructs a repository over an opened store.
    pub fn new(store: &'store mut DocumentStore<Note>) -> Self {
        Self { store }
    }
}

impl NoteRepository for JsonNoteRepository<'_> {
    fn add_note(&mut self, title: &str, text: &str) -> RepoResult<Note> {
        let note = Note::new(title, text);
        self.store.insert(note.clone())?;
        info!(
            "event=note_add module=repo status=ok uid={} title_len={}",
            note.uid,
            title.len()
        );
        Ok(note)
    }

    fn search_notes(&self, title: Option<&str>, uid: Option<&str>) -> RepoResult<Vec<Note>> {
        // A blank selector is treated as absent, so `--uid ""` falls back to
        // the title path the same way an omitted flag would.
        let uid = uid.map(str::trim).filter(|value| !value.is_empty());
        let title = title.map(str::trim).filter(|value| !value.is_empty());

        let matches = match (uid, title) {
            (Some(uid), _) => self.store.search(|note| note.uid_matches(uid)),
            (None, Some(title)) => self.store.search(|note| note.title_contains(title)),
            (None, None) => return Err(RepoError::MissingQuery),
        };
        info!(
            "event=note_search module=repo status=ok by={} matches={}",
            if uid.is_some() { "uid" } else { "title" },
            matches.len()
        );
        Ok(matches)
    }

    fn edit_note(&mut self, uid: &str, text: &str) -> RepoResult<usize> {
        // The predicate deliberately does not enforce a single match: notes
        // sharing a 7-char uid prefix are all updated, like the search path.
        let changed = self.store.update(
            |note| note.set_text(text),
            |note| note.uid_matches(uid),
        )?;
        info!(
            "event=note_edit module=repo status=ok uid_query={} changed={}",
            uid, changed
        );
        Ok(changed)
    }

    fn all_notes(&self) -> RepoResult<Vec<Note>> {
        Ok(self.store.all())
    }
}
