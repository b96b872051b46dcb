//! Apply command
//!
//! Handles: scaffold apply <FILE>

use anyhow::{Context, Result};
use clap::Args;
use scaffold_core::plan::{dry_run, format_report_terminal};
use scaffold_core::util::trim_folder;
use scaffold_core::{DiskStore, Materializer, Report, Settings};
use std::path::{Path, PathBuf};
use tracing::info;

use super::read_layout;

#[derive(Args)]
pub struct ApplyArgs {
    /// Layout document
    #[arg(value_name = "FILE")]
    pub layout: PathBuf,
    /// Vault directory (defaults to the configured vault, then the current directory)
    #[arg(long)]
    pub vault: Option<PathBuf>,
    /// Vault folder to create the layout in (overrides the configured location)
    #[arg(short, long)]
    pub base: Option<String>,
    /// Vault path of the active note, used when new notes go next to it
    #[arg(long, value_name = "NOTE")]
    pub active: Option<String>,
    /// Preview changes without applying
    #[arg(long)]
    pub dry_run: bool,
    /// Validate the whole layout before creating anything
    #[arg(long)]
    pub strict: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: &ApplyArgs, settings_path: &Path) -> Result<()> {
    let settings = Settings::load(settings_path)?;
    let structure = read_layout(&args.layout)?;

    let vault = match args.vault.clone().or_else(|| settings.vault.clone()) {
        Some(vault) => vault,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let base = args.base.as_deref().map_or_else(
        || settings.resolve_base(args.active.as_deref()),
        trim_folder,
    );

    info!(vault = %vault.display(), base = %base, "applying layout");

    if args.strict {
        structure.validate()?;
    }

    let mut store = DiskStore::open(&vault)?;

    let report = if args.dry_run {
        dry_run(&base, &structure, &store)?
    } else {
        let mut materializer = Materializer::new(&mut store);
        if let Err(e) = materializer.run(&base, &structure) {
            let partial = materializer.report();
            if !partial.is_empty() {
                eprintln!(
                    "Created {} folders and {} files before the error; they were kept.",
                    partial.folders_created(),
                    partial.files_created()
                );
            }
            return Err(e.into());
        }
        materializer.into_report()
    };

    print_report(&report, &base, args.dry_run, args.json)
}

fn print_report(report: &Report, base: &str, dry_run: bool, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "base": base,
            "dry_run": dry_run,
            "actions": report.actions,
            "summary": {
                "folders_created": report.folders_created(),
                "folders_existing": report.folders_skipped(),
                "files_created": report.files_created(),
                "files_skipped": report.files_skipped(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format_report_terminal(report, dry_run));
    }
    Ok(())
}
