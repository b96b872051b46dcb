//! Path helpers for resolving vault paths on disk

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors related to vault path validation
#[derive(Error, Debug)]
pub enum PathError {
    #[error("Path traversal attempt detected: {0}")]
    TraversalAttempt(String),

    #[error("Absolute vault path not allowed: {0}")]
    Absolute(String),

    #[error("Invalid path segment {segment:?} in {path}")]
    InvalidSegment { path: String, segment: String },
}

/// Resolve a slash-delimited vault path below the vault root.
///
/// Empty and `.` segments are dropped and `..` may not climb above the
/// root, so `./Projects/Alpha` and `Projects/Alpha` resolve to the same
/// directory. Backslashes and NUL bytes are rejected instead of being
/// handed to the platform's path parser.
///
/// # Errors
/// Returns an error if the path is absolute, contains an invalid segment
/// or would climb above the vault root
pub fn safe_join(root: &Path, vault_path: &str) -> Result<PathBuf, PathError> {
    if vault_path.starts_with('/') {
        return Err(PathError::Absolute(vault_path.to_string()));
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in vault_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(PathError::TraversalAttempt(vault_path.to_string()));
                }
            }
            _ if segment.contains(['\\', '\0']) => {
                return Err(PathError::InvalidSegment {
                    path: vault_path.to_string(),
                    segment: segment.to_string(),
                });
            }
            _ => segments.push(segment),
        }
    }

    let mut joined = root.to_path_buf();
    joined.extend(segments);
    Ok(joined)
}

/// Strip leading and trailing separators from a user-supplied folder.
///
/// An empty result means the vault root and becomes `.`.
pub fn trim_folder(folder: &str) -> String {
    let trimmed = folder.trim().trim_matches('/');
    if trimmed.is_empty() {
        ".".to_string()
    } else {
        trimmed.to_string()
    }
}
