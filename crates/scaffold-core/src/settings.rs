//! Persisted user settings
//!
//! Settings live in a small JSON file. A missing file yields the defaults,
//! and keys absent from the file fall back to their default values.

use crate::util::trim_folder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where layouts are created when no explicit base folder is given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewFileLocation {
    /// Vault root
    #[default]
    Root,
    /// Folder of the active note
    Current,
    /// A fixed folder, see [`Settings::new_file_folder`]
    Folder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default vault directory
    pub vault: Option<PathBuf>,
    pub new_file_location: NewFileLocation,
    /// Folder used when `new_file_location` is `folder`
    pub new_file_folder: String,
}

impl Settings {
    /// Load settings, falling back to defaults when the file is missing
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json + "\n").map_err(io_err)
    }

    /// Folder that would hold a new note created next to `active_note`.
    ///
    /// Returned paths are vault-relative with no trailing separator; `.` is
    /// the vault root.
    pub fn resolve_base(&self, active_note: Option<&str>) -> String {
        match self.new_file_location {
            NewFileLocation::Root => ".".to_string(),
            NewFileLocation::Current => active_note
                .and_then(|note| note.trim_end_matches('/').rsplit_once('/'))
                .map_or_else(|| ".".to_string(), |(parent, _)| trim_folder(parent)),
            NewFileLocation::Folder => trim_folder(&self.new_file_folder),
        }
    }
}
