//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every note is identified by a stable `uid` assigned at creation.
//! - Deletion is not part of the lifecycle; records only accumulate.

pub mod note;
