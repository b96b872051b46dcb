//! CLI command handlers
//!
//! Each subcommand has its own module; reading the layout document is
//! shared here.

pub mod apply;
pub mod check;
pub mod settings;

use anyhow::{bail, Context, Result};
use scaffold_core::Structure;
use std::fs;
use std::path::Path;

/// Read and parse a layout document.
///
/// Only `.json` files are accepted.
pub fn read_layout(path: &Path) -> Result<Structure> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        bail!("Not a JSON file: {}", path.display());
    }

    let bytes =
        fs::read(path).with_context(|| format!("Failed to read layout {}", path.display()))?;
    Structure::from_slice(&bytes)
        .with_context(|| format!("Failed to parse layout {}", path.display()))
}
