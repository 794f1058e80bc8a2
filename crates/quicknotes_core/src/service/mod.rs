//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate editor sessions and repository calls into use-case APIs.
//! - Keep the CLI layer decoupled from storage and editing details.

pub mod note_service;
