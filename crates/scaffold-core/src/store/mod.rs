//! Vault storage primitives
//!
//! The materializer needs existence checks, folder creation and empty-file
//! creation from the vault. Implementations:
//!
//! - [`DiskStore`] writes into a vault directory on disk
//! - [`MemoryStore`] keeps everything in memory and journals mutations
//! - [`PlanningStore`] overlays another store to simulate a run

mod disk;
mod memory;
mod planning;

pub use disk::DiskStore;
pub use memory::{MemoryStore, StoreCall};
pub use planning::PlanningStore;

use crate::util::PathError;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by store primitives
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Path already exists: {0}")]
    AlreadyExists(String),

    #[error("Path security error: {0}")]
    PathSecurity(#[from] PathError),
}

impl StoreError {
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }
}

/// Primitive vault operations used by the materializer.
///
/// Paths are slash-delimited and relative to the vault.
pub trait Store {
    /// Whether a folder or file exists at `path`
    fn exists(&self, path: &str) -> bool;

    /// Whether a file (not a folder) exists at `path`
    fn is_file(&self, path: &str) -> bool;

    /// Create a folder.
    ///
    /// Creating a folder that already exists succeeds without changes.
    /// Fails with [`StoreError::AlreadyExists`] if a file occupies `path`.
    fn create_folder(&mut self, path: &str) -> StoreResult<()>;

    /// Create an empty file.
    ///
    /// Never overwrites: fails with [`StoreError::AlreadyExists`] if
    /// anything already occupies `path`.
    fn create_file(&mut self, path: &str) -> StoreResult<()>;
}
