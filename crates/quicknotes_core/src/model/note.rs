//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record persisted by the document store.
//! - Own uid generation and the abbreviated-uid comparison rule.
//!
//! # Invariants
//! - `uid` is assigned once at construction and never changes.
//! - `title` is set at creation; no mutation path exists for it.
//! - `updated` stays `None` until the first edit and is omitted from the
//!   persisted document while absent.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of leading characters compared when matching notes by uid.
///
/// Abbreviated uids work like short commit hashes: any query whose first
/// `UID_PREFIX_LEN` characters equal the note's first `UID_PREFIX_LEN`
/// characters is a match.
pub const UID_PREFIX_LEN: usize = 7;

/// A single user-authored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable identifier: 32 lowercase hex chars from a random 128-bit value.
    pub uid: String,
    /// Free-form title, immutable after creation.
    pub title: String,
    /// Multi-line body, replaced wholesale by edits.
    pub text: String,
    /// Local ISO-8601 timestamp stamped at insert.
    pub created: String,
    /// Local ISO-8601 timestamp of the most recent edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl Note {
    /// Creates a note with a freshly generated uid and `created` stamp.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_uid(Uuid::new_v4().simple().to_string(), title, text)
    }

    /// Creates a note with a caller-provided uid.
    ///
    /// Used where identity already exists externally (imports, tests).
    /// Uniqueness against the rest of the collection is not checked here or
    /// anywhere else; the 128-bit space makes collisions negligible.
    pub fn with_uid(
        uid: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            text: text.into(),
            created: local_timestamp(),
            updated: None,
        }
    }

    /// Replaces the body and stamps `updated`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.updated = Some(local_timestamp());
    }

    /// Case-insensitive substring match: does this note's title contain `query`?
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// Abbreviated-uid match against `query` (see [`uid_prefix_matches`]).
    pub fn uid_matches(&self, query: &str) -> bool {
        uid_prefix_matches(query, &self.uid)
    }
}

/// Compares two uids on their first [`UID_PREFIX_LEN`] characters.
///
/// Both sides are truncated before comparison, so `"1f2a9c0..."` matches the
/// query `"1f2a9c0"` and vice versa. A side shorter than the prefix length
/// compares whole; two distinct uids shorter than the prefix therefore never
/// alias each other.
pub fn uid_prefix_matches(query_uid: &str, candidate_uid: &str) -> bool {
    head(query_uid) == head(candidate_uid)
}

fn head(uid: &str) -> &str {
    uid.get(..UID_PREFIX_LEN).unwrap_or(uid)
}

/// Returns the current local time as an ISO-8601 string without offset.
pub fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
