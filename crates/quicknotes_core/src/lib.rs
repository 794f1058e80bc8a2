//! Core domain logic for QuickNotes.
//! This crate is the single source of truth for note semantics; it knows
//! nothing about argv or the terminal.

pub mod editor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use editor::{EditorError, NoteEditor};
pub use logging::{default_log_level, init_logging};
pub use model::note::{local_timestamp, uid_prefix_matches, Note, UID_PREFIX_LEN};
pub use repo::note_repo::{JsonNoteRepository, NoteRepository, RepoError, RepoResult};
pub use service::note_service::{NoteService, NoteServiceError};
pub use store::{open_store, open_store_in_memory, DocumentStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
