//! Error types for layout parsing and materialization

use crate::store::StoreError;
use crate::structure::ValueKind;
use thiserror::Error;

/// Result type for materialization operations
pub type MaterializeResult<T> = Result<T, MaterializeError>;

/// Errors that can occur while parsing or materializing a layout
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// A declared file name lacks the note extension
    #[error("File {0} does not have a proper \".md\" extension")]
    InvalidExtension(String),

    /// A value is neither a list of file names nor an object
    #[error("Invalid structure for key: {key} (found {found})")]
    InvalidStructure { key: String, found: ValueKind },

    /// The document root is not a JSON object
    #[error("Layout document must be a JSON object, found {0}")]
    InvalidRoot(ValueKind),

    /// The base path is empty or ends with a separator
    #[error("Invalid base path: '{0}'")]
    InvalidBasePath(String),

    /// The document is not valid UTF-8
    #[error("Layout document is not valid UTF-8")]
    InvalidUtf8,

    /// The document is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A store primitive failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MaterializeError {
    /// Get the error code for CLI/JSON responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidExtension(_) => "INVALID_EXTENSION",
            Self::InvalidStructure { .. } => "INVALID_STRUCTURE",
            Self::InvalidRoot(_) => "INVALID_ROOT",
            Self::InvalidBasePath(_) => "INVALID_BASE_PATH",
            Self::InvalidUtf8 | Self::Json(_) => "PARSE_ERROR",
            Self::Store(_) => "IO_ERROR",
        }
    }

    /// Whether the error was raised by layout validation rather than the store
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidExtension(_) | Self::InvalidStructure { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_extension_message_names_file() {
        let err = MaterializeError::InvalidExtension("draft.txt".to_string());
        assert_eq!(
            err.to_string(),
            "File draft.txt does not have a proper \".md\" extension"
        );
        assert_eq!(err.code(), "INVALID_EXTENSION");
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_structure_message_names_key() {
        let err = MaterializeError::InvalidStructure {
            key: "Inbox".to_string(),
            found: ValueKind::Number,
        };
        assert_eq!(err.to_string(), "Invalid structure for key: Inbox (found a number)");
        assert_eq!(err.code(), "INVALID_STRUCTURE");
    }

    #[test]
    fn test_store_errors_are_not_validation() {
        let err = MaterializeError::from(StoreError::AlreadyExists("a/b.md".to_string()));
        assert!(!err.is_validation());
        assert_eq!(err.code(), "IO_ERROR");
    }
}
