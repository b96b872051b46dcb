//! Layout materialization
//!
//! Walks a [`Structure`] depth-first in document order and creates the
//! folders and empty note files it declares. The walk stops at the first
//! error; anything created before that point is kept.

use crate::error::{MaterializeError, MaterializeResult};
use crate::store::Store;
use crate::structure::{has_note_extension, Structure, StructureNode};
use serde::Serialize;
use tracing::{debug, info, warn};

/// A single decision taken during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Folder creation was requested from the store.
    ///
    /// Folders holding a file list are always requested, even when they
    /// already exist.
    CreateFolder { path: String },
    /// Nested folder already existed
    SkipFolder { path: String },
    /// Empty file created
    CreateFile { path: String },
    /// File already existed and was left untouched
    SkipFile { path: String },
}

impl Action {
    pub fn path(&self) -> &str {
        match self {
            Self::CreateFolder { path }
            | Self::SkipFolder { path }
            | Self::CreateFile { path }
            | Self::SkipFile { path } => path,
        }
    }
}

/// Ordered record of the actions taken by a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub actions: Vec<Action>,
}

impl Report {
    pub fn folders_created(&self) -> usize {
        self.count(|a| matches!(a, Action::CreateFolder { .. }))
    }

    pub fn folders_skipped(&self) -> usize {
        self.count(|a| matches!(a, Action::SkipFolder { .. }))
    }

    pub fn files_created(&self) -> usize {
        self.count(|a| matches!(a, Action::CreateFile { .. }))
    }

    pub fn files_skipped(&self) -> usize {
        self.count(|a| matches!(a, Action::SkipFile { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    fn count(&self, pred: impl Fn(&Action) -> bool) -> usize {
        self.actions.iter().filter(|a| pred(a)).count()
    }
}

/// Materializes layouts into a store, keeping a report of what it did.
///
/// The report stays available after a failed run so callers can tell what
/// was created before the walk aborted.
pub struct Materializer<'s, S: Store + ?Sized> {
    store: &'s mut S,
    report: Report,
}

impl<'s, S: Store + ?Sized> Materializer<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self {
            store,
            report: Report::default(),
        }
    }

    /// Create everything `structure` declares under `base`.
    ///
    /// `base` must be non-empty and must not end with `/`.
    pub fn run(&mut self, base: &str, structure: &Structure) -> MaterializeResult<()> {
        if base.is_empty() || base.ends_with('/') {
            return Err(MaterializeError::InvalidBasePath(base.to_string()));
        }

        info!(base, entries = structure.entries().len(), "materializing layout");
        let result = self.walk(base, structure.entries());

        match &result {
            Ok(()) => info!(
                folders = self.report.folders_created(),
                files = self.report.files_created(),
                skipped = self.report.files_skipped(),
                "layout materialized"
            ),
            Err(e) => warn!(
                error = %e,
                completed = self.report.actions.len(),
                "materialization aborted, created entries are kept"
            ),
        }

        result
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_report(self) -> Report {
        self.report
    }

    fn walk(&mut self, base: &str, entries: &[(String, StructureNode)]) -> MaterializeResult<()> {
        for (key, node) in entries {
            let folder = join(base, key);

            match node {
                StructureNode::Files(names) => {
                    self.store.create_folder(&folder)?;
                    self.record(Action::CreateFolder { path: folder.clone() });

                    for name in names {
                        if !has_note_extension(name) {
                            return Err(MaterializeError::InvalidExtension(name.clone()));
                        }

                        let file = join(&folder, name);
                        if self.store.exists(&file) {
                            self.record(Action::SkipFile { path: file });
                        } else {
                            self.store.create_file(&file)?;
                            self.record(Action::CreateFile { path: file });
                        }
                    }
                }
                StructureNode::Folder(children) => {
                    if self.store.exists(&folder) {
                        self.record(Action::SkipFolder {
                            path: folder.clone(),
                        });
                    } else {
                        self.store.create_folder(&folder)?;
                        self.record(Action::CreateFolder {
                            path: folder.clone(),
                        });
                    }

                    self.walk(&folder, children)?;
                }
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

    fn record(&mut self, action: Action) {
        debug!(?action, "layout action");
        self.report.actions.push(action);
    }
}

/// Materialize `structure` under `base` in one call
pub fn materialize<S: Store + ?Sized>(
    base: &str,
    structure: &Structure,
    store: &mut S,
) -> MaterializeResult<Report> {
    let mut materializer = Materializer::new(store);
    materializer.run(base, structure)?;
    Ok(materializer.into_report())
}

fn join(base: &str, name: &str) -> String {
    format!("{base}/{name}")
}
