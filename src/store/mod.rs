//! Local record store: a JSON document with commit-on-success updates.
//!
//! ## Transaction semantics
//!
//! Every update goes through [`Store::transaction`]: the document is loaded,
//! the closure mutates it, and the file is rewritten only if the closure
//! returns `Ok`. On `Err` the file is untouched, so a failed operation can
//! never leave a partial write behind. The rewrite goes through a temporary
//! file and a rename.
//!
//! A missing file reads as an empty document; the store file is created on
//! the first successful transaction.

mod records;

pub use records::{Document, ScoreRecord, UserRecord};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

/// Handle to the store file.
///
/// Opening performs no I/O; each read or transaction loads the document
/// fresh and releases it when done.
#[derive(Clone, Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a handle for the document at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document and apply a read-only closure to it.
    pub fn read<T>(&self, f: impl FnOnce(&Document) -> T) -> Result<T> {
        Ok(f(&self.load()?))
    }

    /// Load the document, apply a fallible update, and commit on success.
    ///
    /// If the closure returns `Err` nothing is written and the error is
    /// passed through.
    pub fn transaction<T>(&self, f: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let mut doc = self.load()?;
        let value = f(&mut doc)?;
        self.commit(&doc)?;
        Ok(value)
    }

    fn load(&self) -> Result<Document> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Document::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn commit(&self, doc: &Document) -> Result<()> {
        let raw = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!("committed store to {}", self.path.display());
        Ok(())
    }
}
