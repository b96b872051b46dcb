//! Layout document parsing
//!
//! A layout document is a JSON object whose values are either lists of
//! note file names or nested objects describing subfolders. The shape of
//! every value is decided once here, so the materializer only has to match
//! on [`StructureNode`].

use crate::error::{MaterializeError, MaterializeResult};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Suffix every declared file name must carry
pub const NOTE_EXTENSION: &str = ".md";

/// One level of a parsed layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureNode {
    /// File names created directly inside the folder named by the key.
    ///
    /// Non-string entries are kept as their JSON text, which never carries
    /// the note extension, so they fail at their position in the list.
    Files(Vec<String>),
    /// A nested folder, entries kept in document order
    Folder(Vec<(String, StructureNode)>),
    /// Any other JSON value where a node was expected
    Invalid(ValueKind),
}

/// Kind of JSON value, used in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a JSON value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Null => "null",
            Self::Bool => "a boolean",
            Self::Number => "a number",
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
        };
        f.write_str(text)
    }
}

impl From<Value> for StructureNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Files(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(name) => name,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            Value::Object(map) => Self::Folder(entries_from(map)),
            other => Self::Invalid(ValueKind::of(&other)),
        }
    }
}

fn entries_from(map: Map<String, Value>) -> Vec<(String, StructureNode)> {
    map.into_iter()
        .map(|(key, value)| (key, StructureNode::from(value)))
        .collect()
}

/// Whether a file name carries the note extension
pub fn has_note_extension(name: &str) -> bool {
    name.ends_with(NOTE_EXTENSION)
}

/// Number of folders and files a layout declares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub folders: usize,
    pub files: usize,
}

/// A parsed layout document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    entries: Vec<(String, StructureNode)>,
}

impl Structure {
    /// Parse a layout document from raw file bytes
    pub fn from_slice(bytes: &[u8]) -> MaterializeResult<Self> {
        let text = std::str::from_utf8(bytes).map_err(|_| MaterializeError::InvalidUtf8)?;
        text.parse()
    }

    /// Top-level entries in document order
    pub fn entries(&self) -> &[(String, StructureNode)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the whole layout without touching a store.
    ///
    /// Reports the same first error a materialization run would hit, in the
    /// same walk order.
    pub fn validate(&self) -> MaterializeResult<()> {
        validate_entries(&self.entries)
    }

    /// Folders and files a run against an empty store would create
    pub fn counts(&self) -> Counts {
        let mut counts = Counts::default();
        count_entries(&self.entries, &mut counts);
        counts
    }
}

impl TryFrom<Value> for Structure {
    type Error = MaterializeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self {
                entries: entries_from(map),
            }),
            other => Err(MaterializeError::InvalidRoot(ValueKind::of(&other))),
        }
    }
}

impl FromStr for Structure {
    type Err = MaterializeError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(source)?;
        Self::try_from(value)
    }
}

fn validate_entries(entries: &[(String, StructureNode)]) -> MaterializeResult<()> {
    for (key, node) in entries {
        match node {
            StructureNode::Files(names) => {
                if let Some(name) = names.iter().find(|name| !has_note_extension(name)) {
                    return Err(MaterializeError::InvalidExtension(name.clone()));
                }
            }
            StructureNode::Folder(children) => validate_entries(children)?,
            StructureNode::Invalid(found) => {
                return Err(MaterializeError::InvalidStructure {
                    key: key.clone(),
                    found: *found,
                });
            }
        }
    }
    Ok(())
}

fn count_entries(entries: &[(String, StructureNode)], counts: &mut Counts) {
    for (_, node) in entries {
        match node {
            StructureNode::Files(names) => {
                counts.folders += 1;
                counts.files += names.len();
            }
            StructureNode::Folder(children) => {
                counts.folders += 1;
                count_entries(children, counts);
            }
            StructureNode::Invalid(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_document_order() {
        let structure: Structure = r#"{"Zeta": [], "Alpha": {"Beta": ["b.md", "a.md"]}}"#
            .parse()
            .unwrap();

        let keys: Vec<&str> = structure.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);

        let StructureNode::Folder(children) = &structure.entries()[1].1 else {
            panic!("expected a folder");
        };
        assert_eq!(
            children[0],
            (
                "Beta".to_string(),
                StructureNode::Files(vec!["b.md".to_string(), "a.md".to_string()])
            )
        );
    }

    #[test]
    fn test_parse_empty_object() {
        let structure: Structure = "{}".parse().unwrap();
        assert!(structure.is_empty());
        assert!(structure.validate().is_ok());
        assert_eq!(structure.counts(), Counts::default());
    }

    #[test]
    fn test_scalars_become_invalid_nodes() {
        let structure: Structure =
            r#"{"a": 1, "b": "x", "c": true, "d": null}"#.parse().unwrap();

        let kinds: Vec<&StructureNode> = structure.entries().iter().map(|(_, n)| n).collect();
        assert_eq!(
            kinds,
            vec![
                &StructureNode::Invalid(ValueKind::Number),
                &StructureNode::Invalid(ValueKind::String),
                &StructureNode::Invalid(ValueKind::Bool),
                &StructureNode::Invalid(ValueKind::Null),
            ]
        );
    }

    #[test]
    fn test_non_string_list_entries_keep_their_position() {
        let structure: Structure =
            r#"{"Notes": ["a.md", 3, {"b": "c.md"}, null]}"#.parse().unwrap();

        assert_eq!(
            structure.entries()[0].1,
            StructureNode::Files(vec![
                "a.md".to_string(),
                "3".to_string(),
                r#"{"b":"c.md"}"#.to_string(),
                "null".to_string(),
            ])
        );

        let err = structure.validate().unwrap_err();
        assert!(matches!(err, MaterializeError::InvalidExtension(name) if name == "3"));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = "[\"a.md\"]".parse::<Structure>().unwrap_err();
        assert!(matches!(err, MaterializeError::InvalidRoot(ValueKind::Array)));

        let err = "42".parse::<Structure>().unwrap_err();
        assert!(matches!(err, MaterializeError::InvalidRoot(ValueKind::Number)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = "{\"a\": [".parse::<Structure>().unwrap_err();
        assert_eq!(err.code(), "PARSE_ERROR");
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let err = Structure::from_slice(&[0x7b, 0xff, 0x7d]).unwrap_err();
        assert!(matches!(err, MaterializeError::InvalidUtf8));
    }

    #[test]
    fn test_validate_reports_first_error_in_walk_order() {
        let structure: Structure =
            r#"{"A": {"B": ["ok.md", "bad.txt"]}, "C": 3}"#.parse().unwrap();
        let err = structure.validate().unwrap_err();
        assert!(matches!(err, MaterializeError::InvalidExtension(name) if name == "bad.txt"));

        let structure: Structure = r#"{"C": 3, "A": ["bad.txt"]}"#.parse().unwrap();
        let err = structure.validate().unwrap_err();
        assert!(matches!(err, MaterializeError::InvalidStructure { key, .. } if key == "C"));
    }

    #[test]
    fn test_extension_check_is_case_sensitive() {
        assert!(has_note_extension("Notes.md"));
        assert!(!has_note_extension("Notes.MD"));
        assert!(!has_note_extension("Notes.md.txt"));
    }

    #[test]
    fn test_counts() {
        let structure: Structure =
            r#"{"Projects": {"Alpha": ["Notes.md", "Todo.md"]}, "Inbox": []}"#.parse().unwrap();
        assert_eq!(structure.counts(), Counts { folders: 3, files: 2 });
    }
}
