//! Dry-run overlay store

use super::{Store, StoreError, StoreResult};
use std::collections::BTreeSet;
use std::io::ErrorKind;

/// Read-through overlay that records creations without touching the
/// underlying store.
///
/// Running the materializer against a `PlanningStore` yields the exact
/// report a real run would produce, as long as nothing else changes the
/// underlying store in between. Creating anything at or below a path that
/// holds a file fails the way a disk-backed vault does.
#[derive(Debug)]
pub struct PlanningStore<'a, S: Store + ?Sized> {
    inner: &'a S,
    folders: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl<'a, S: Store + ?Sized> PlanningStore<'a, S> {
    pub fn new(inner: &'a S) -> Self {
        Self {
            inner,
            folders: BTreeSet::new(),
            files: BTreeSet::new(),
        }
    }

    /// Fail if any folder above `path` is actually a file
    fn check_parents(&self, path: &str) -> StoreResult<()> {
        for (end, _) in path.match_indices('/') {
            let parent = &path[..end];
            if self.is_file(parent) {
                return Err(StoreError::io(
                    path,
                    std::io::Error::new(ErrorKind::Other, format!("{parent} is not a folder")),
                ));
            }
        }
        Ok(())
    }
}

impl<S: Store + ?Sized> Store for PlanningStore<'_, S> {
    fn exists(&self, path: &str) -> bool {
        self.folders.contains(path) || self.files.contains(path) || self.inner.exists(path)
    }

    fn is_file(&self, path: &str) -> bool {
        self.files.contains(path) || (!self.folders.contains(path) && self.inner.is_file(path))
    }

    fn create_folder(&mut self, path: &str) -> StoreResult<()> {
        self.check_parents(path)?;
        if self.is_file(path) {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        self.folders.insert(path.to_string());
        Ok(())
    }

    fn create_file(&mut self, path: &str) -> StoreResult<()> {
        self.check_parents(path)?;
        if self.exists(path) {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        self.files.insert(path.to_string());
        Ok(())
    }
}
