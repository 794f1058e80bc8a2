//! JSON document store.
//!
//! # Responsibility
//! - Own the on-disk JSON representation of a record collection.
//! - Provide insert/update/search primitives over predicates.
//!
//! # Invariants
//! - The backing file always holds one pretty-printed JSON array.
//! - Every mutating call rewrites the file synchronously before returning.
//! - Record order is insertion order; the store never reorders.

use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport error for document store operations.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store i/o failure: {err}"),
            Self::Json(err) => write!(f, "store document is not valid JSON: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// File-backed collection of JSON records.
///
/// The whole collection lives in memory; mutations rewrite the backing file
/// in one synchronous pass. There is no write-ahead log and no transaction
/// boundary, which is acceptable for a single-user, low-frequency store.
pub struct DocumentStore<T> {
    path: Option<PathBuf>,
    records: Vec<T>,
}

/// Opens the store file at `path`, creating it and its parent directories on
/// first use. A missing or empty file yields an empty collection.
///
/// # Side effects
/// - Creates parent directories.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store<T: DeserializeOwned>(path: impl AsRef<Path>) -> StoreResult<DocumentStore<T>> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode=file");

    match load_records(path.as_ref()) {
        Ok(records) => {
            info!(
                "event=store_open module=store status=ok mode=file records={} duration_ms={}",
                records.len(),
                started_at.elapsed().as_millis()
            );
            Ok(DocumentStore {
                path: Some(path.as_ref().to_path_buf()),
                records,
            })
        }
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens a store with no backing file. Used by tests and dry runs.
pub fn open_store_in_memory<T>() -> DocumentStore<T> {
    info!("event=store_open module=store status=ok mode=memory records=0");
    DocumentStore {
        path: None,
        records: Vec::new(),
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs::write(path, b"[]")?;
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&raw)?)
}

impl<T: Serialize> DocumentStore<T> {
    /// Appends one record and rewrites the backing file.
    ///
    /// No schema or uniqueness validation is performed.
    pub fn insert(&mut self, record: T) -> StoreResult<()> {
        self.records.push(record);
        self.flush()
    }

    /// Applies `patch` to every record satisfying `predicate`.
    ///
    /// Returns the number of patched records. Zero matches is a silent no-op
    /// and the backing file is left untouched.
    pub fn update<P, F>(&mut self, patch: F, predicate: P) -> StoreResult<usize>
    where
        P: Fn(&T) -> bool,
        F: Fn(&mut T),
    {
        let mut changed = 0;
        for record in self.records.iter_mut().filter(|record| predicate(record)) {
            patch(record);
            changed += 1;
        }
        if changed > 0 {
            self.flush()?;
        }
        Ok(changed)
    }

    fn flush(&self) -> StoreResult<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        let doc = serde_json::to_string_pretty(&self.records)?;
        if let Err(err) = fs::write(path, doc) {
            error!(
                "event=store_flush module=store status=error path={} error={}",
                path.display(),
                err
            );
            return Err(err.into());
        }
        Ok(())
    }
}

impl<T: Clone> DocumentStore<T> {
    /// Returns clones of all records satisfying `predicate`, in insertion
    /// order. An empty result is not an error.
    pub fn search<P: Fn(&T) -> bool>(&self, predicate: P) -> Vec<T> {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Returns every record, unfiltered.
    pub fn all(&self) -> Vec<T> {
        self.records.clone()
    }
}

impl<T> DocumentStore<T> {
    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
