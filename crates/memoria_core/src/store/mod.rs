//! Whole-document persistence.
//!
//! # Responsibility
//! - Define the load/replace contract for the archive document.
//! - Provide file-backed and in-process implementations.
//!
//! # Invariants
//! - Documents are read and written wholesale; there are no partial writes.
//! - A missing document loads as `AppData::default()`.
//! - Last write wins; stores do not detect concurrent writers.

use crate::model::item::AppData;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from document store operations.
#[derive(Debug)]
pub enum StoreError {
    /// File system failure at `path`.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document could not be encoded.
    Encode(serde_json::Error),
    /// Store refused the write (used by non-file implementations).
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "store io error at `{}`: {source}", path.display()),
            Self::Encode(err) => write!(f, "failed to encode archive document: {err}"),
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Persistence contract for the archive document.
pub trait DocumentStore {
    /// Returns the current document, or the default one when none exists.
    fn load(&self) -> StoreResult<AppData>;
    /// Replaces the stored document verbatim.
    fn save(&self, data: &AppData) -> StoreResult<()>;
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn load(&self) -> StoreResult<AppData> {
        (**self).load()
    }

    fn save(&self, data: &AppData) -> StoreResult<()> {
        (**self).save(data)
    }
}
