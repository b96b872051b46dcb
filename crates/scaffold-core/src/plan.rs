//! Dry runs and report formatting

use crate::error::MaterializeResult;
use crate::materialize::{Action, Materializer, Report};
use crate::store::{PlanningStore, Store};
use crate::structure::Structure;
use std::fmt;

/// Simulate a run against `store` without changing it.
///
/// Fails with the same error a real run would hit first.
pub fn dry_run<S: Store + ?Sized>(
    base: &str,
    structure: &Structure,
    store: &S,
) -> MaterializeResult<Report> {
    let mut planning = PlanningStore::new(store);
    let mut materializer = Materializer::new(&mut planning);
    materializer.run(base, structure)?;
    Ok(materializer.into_report())
}

/// Terminal rendering of a report
pub struct TerminalReport<'a> {
    report: &'a Report,
    dry_run: bool,
}

impl<'a> TerminalReport<'a> {
    pub fn new(report: &'a Report, dry_run: bool) -> Self {
        Self { report, dry_run }
    }
}

impl fmt::Display for TerminalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        if self.dry_run {
            writeln!(f, "=== Layout Plan (dry run) ===")?;
        } else {
            writeln!(f, "=== Layout Applied ===")?;
        }

        for action in &report.actions {
            let label = match action {
                Action::CreateFolder { .. } => "MKDIR",
                Action::SkipFolder { .. } => "EXISTS",
                Action::CreateFile { .. } => "CREATE",
                Action::SkipFile { .. } => "SKIP",
            };
            writeln!(f, "{label:>7}  {}", action.path())?;
        }

        if !report.is_empty() {
            writeln!(f)?;
        }
        write!(
            f,
            "Folders: {} created, {} existing. Files: {} created, {} skipped.",
            report.folders_created(),
            report.folders_skipped(),
            report.files_created(),
            report.files_skipped()
        )
    }
}

/// Format a report for terminal display
pub fn format_report_terminal(report: &Report, dry_run: bool) -> String {
    TerminalReport::new(report, dry_run).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaterializeError;
    use crate::store::{MemoryStore, StoreError};

    #[test]
    fn test_dry_run_matches_real_run() {
        let structure: Structure =
            r#"{"Projects": {"Alpha": ["Notes.md"]}, "Inbox": ["Today.md"]}"#.parse().unwrap();
        let mut store = MemoryStore::new().with_file("Root/Inbox/Today.md", "x");

        let planned = dry_run("Root", &structure, &store).unwrap();
        assert!(store.calls().is_empty());

        let applied = crate::materialize("Root", &structure, &mut store).unwrap();
        assert_eq!(planned, applied);
    }

    #[test]
    fn test_dry_run_fails_where_a_file_blocks_a_folder() {
        let structure: Structure = r#"{"Inbox": ["a.md"]}"#.parse().unwrap();
        let mut store = MemoryStore::new().with_file("Root/Inbox", "");

        let planned = dry_run("Root", &structure, &store).unwrap_err();
        assert!(matches!(
            planned,
            MaterializeError::Store(StoreError::AlreadyExists(ref p)) if p == "Root/Inbox"
        ));

        let applied = crate::materialize("Root", &structure, &mut store).unwrap_err();
        assert_eq!(planned.to_string(), applied.to_string());
    }

    #[test]
    fn test_dry_run_reports_first_error() {
        let structure: Structure = r#"{"Notes": ["a.md", "b.txt"]}"#.parse().unwrap();
        let store = MemoryStore::new();

        let err = dry_run("Root", &structure, &store).unwrap_err();
        assert!(matches!(err, MaterializeError::InvalidExtension(_)));
        assert!(store.folders().next().is_none());
    }

    #[test]
    fn test_terminal_format() {
        let report = Report {
            actions: vec![
                Action::CreateFolder {
                    path: "Root/Inbox".to_string(),
                },
                Action::SkipFile {
                    path: "Root/Inbox/Today.md".to_string(),
                },
            ],
        };

        let output = format_report_terminal(&report, true);
        assert!(output.starts_with("=== Layout Plan (dry run) ==="));
        assert!(output.contains("  MKDIR  Root/Inbox"));
        assert!(output.contains("   SKIP  Root/Inbox/Today.md"));
        assert!(output.ends_with("Folders: 1 created, 0 existing. Files: 0 created, 1 skipped."));
    }
}
