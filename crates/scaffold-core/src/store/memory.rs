//! In-memory vault store

use super::{Store, StoreError, StoreResult};
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;

/// A mutating call received by a [`MemoryStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    CreateFolder(String),
    CreateFile(String),
}

/// An in-memory vault.
///
/// Paths are stored verbatim with no normalization. Every mutating call is
/// journaled in order, including folder requests that changed nothing.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    folders: BTreeSet<String>,
    files: BTreeMap<String, String>,
    calls: Vec<StoreCall>,
    failing: BTreeSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing folder
    #[must_use]
    pub fn with_folder(mut self, path: &str) -> Self {
        self.folders.insert(path.to_string());
        self
    }

    /// Seed an existing file with contents
    #[must_use]
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }

    /// Make every create call on `path` fail with an I/O error.
    ///
    /// The failed call is still journaled in [`MemoryStore::calls`]; the
    /// failure fires after the call is recorded and leaves no entry behind.
    #[must_use]
    pub fn failing_at(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    pub fn folders(&self) -> impl Iterator<Item = &str> {
        self.folders.iter().map(String::as_str)
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Contents of a file, if present
    pub fn contents(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Mutating calls received so far, in order
    pub fn calls(&self) -> &[StoreCall] {
        &self.calls
    }

    fn check_failing(&self, path: &str) -> StoreResult<()> {
        if self.failing.contains(path) {
            return Err(StoreError::io(
                path,
                std::io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    fn exists(&self, path: &str) -> bool {
        self.folders.contains(path) || self.files.contains_key(path)
    }

    fn is_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn create_folder(&mut self, path: &str) -> StoreResult<()> {
        self.calls.push(StoreCall::CreateFolder(path.to_string()));
        self.check_failing(path)?;
        if self.files.contains_key(path) {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        self.folders.insert(path.to_string());
        Ok(())
    }

    fn create_file(&mut self, path: &str) -> StoreResult<()> {
        self.calls.push(StoreCall::CreateFile(path.to_string()));
        self.check_failing(path)?;
        if self.exists(path) {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        self.files.insert(path.to_string(), String::new());
        Ok(())
    }
}
