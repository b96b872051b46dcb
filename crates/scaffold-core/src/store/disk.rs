//! Disk-backed vault store

use super::{Store, StoreError, StoreResult};
use crate::util::safe_join;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::trace;

/// A vault rooted at a directory on disk
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Open a vault directory.
    ///
    /// # Errors
    /// Returns an error if `root` is not an existing directory
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StoreError::io(
                &root.display().to_string(),
                std::io::Error::new(ErrorKind::NotFound, "vault directory not found"),
            ));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a vault path
    ///
    /// # Errors
    /// Returns an error if the path escapes the vault
    pub fn resolve(&self, path: &str) -> StoreResult<PathBuf> {
        Ok(safe_join(&self.root, path)?)
    }
}

impl Store for DiskStore {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|full| full.exists())
    }

    fn is_file(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|full| full.is_file())
    }

    fn create_folder(&mut self, path: &str) -> StoreResult<()> {
        let full = self.resolve(path)?;
        if full.is_file() {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        trace!(path = %full.display(), "create_dir_all");
        fs::create_dir_all(&full).map_err(|e| StoreError::io(path, e))
    }

    fn create_file(&mut self, path: &str) -> StoreResult<()> {
        let full = self.resolve(path)?;
        trace!(path = %full.display(), "create_new");
        match OpenOptions::new().write(true).create_new(true).open(&full) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(StoreError::AlreadyExists(path.to_string()))
            }
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}
