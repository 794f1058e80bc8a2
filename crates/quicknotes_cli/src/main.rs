//! QuickNotes command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, resolve the cache path, wire store/repo/service.
//! - Format output; this is the only crate that writes to stdout/stderr.

mod editor;

use clap::{Parser, Subcommand};
use editor::TermEditor;
use quicknotes_core::{
    default_log_level, init_logging, open_store, JsonNoteRepository, Note, NoteRepository,
    NoteService, NoteServiceError, RepoError, StoreError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Take notes straight from the command line.
#[derive(Parser)]
#[command(name = "quicknotes", version, about = "Take notes straight from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a note
    Add {
        /// Title of the new note
        title: String,
    },
    /// Edit a note
    Edit {
        /// Uid (or uid prefix) of the note to edit
        uid: String,
    },
    /// List/search notes
    Ls {
        /// List notes whose title contains this text
        #[arg(long)]
        title: Option<String>,
        /// List notes matching this uid prefix
        #[arg(long)]
        uid: Option<String>,
    },
}

#[derive(Debug)]
enum AppError {
    NoCacheDir,
    Store(StoreError),
    Repo(RepoError),
    Service(NoteServiceError),
    Render(serde_json::Error),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCacheDir => write!(f, "could not resolve a user cache directory"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "failed to render notes: {err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoCacheDir => None,
            Self::Store(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Service(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<RepoError> for AppError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<NoteServiceError> for AppError {
    fn from(value: NoteServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let data_dir = app_data_dir()?;

    // Logging is best-effort: a read-only cache dir should not block note-taking.
    if let Err(err) = init_logging(default_log_level(), data_dir.join("logs")) {
        eprintln!("warning: logging disabled: {err}");
    }

    let mut store = open_store(data_dir.join("notes.json"))?;

    match cli.command {
        Command::Add { title } => {
            let repo = JsonNoteRepository::new(&mut store);
            let mut service = NoteService::new(repo, TermEditor::new());
            service.compose(&title)?;
        }
        Command::Edit { uid } => {
            let repo = JsonNoteRepository::new(&mut store);
            let mut service = NoteService::new(repo, TermEditor::new());
            match service.revise(&uid) {
                Ok(_) => {}
                Err(NoteServiceError::NoteNotFound(_)) => {
                    println!("No note with uid '{uid}'");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Ls { title, uid } => {
            let repo = JsonNoteRepository::new(&mut store);
            if let Some(title) = title.filter(|value| !value.is_empty()) {
                let matches = repo.search_notes(Some(&title), None)?;
                if matches.is_empty() {
                    println!("No notes with title: {title}");
                } else {
                    print_notes(&matches)?;
                }
            } else if let Some(uid) = uid.filter(|value| !value.is_empty()) {
                let matches = repo.search_notes(None, Some(&uid))?;
                if matches.is_empty() {
                    println!("No notes with uid: {uid}");
                } else {
                    print_notes(&matches)?;
                }
            } else {
                print_notes(&repo.all_notes()?)?;
            }
        }
    }

    Ok(())
}

fn app_data_dir() -> Result<PathBuf, AppError> {
    Ok(dirs::cache_dir()
        .ok_or(AppError::NoCacheDir)?
        .join("quicknotes"))
}

fn print_notes(notes: &[Note]) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(notes)?);
    Ok(())
}
