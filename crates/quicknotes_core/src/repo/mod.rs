//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for notes.
//! - Isolate document-store details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`MissingQuery`) in addition to
//!   store transport errors.

pub mod note_repo;
