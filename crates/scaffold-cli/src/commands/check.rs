//! Check command
//!
//! Handles: scaffold check <FILE>

use anyhow::{bail, Result};
use std::path::Path;

use super::read_layout;

pub fn execute(layout: &Path, json: bool) -> Result<()> {
    let structure = read_layout(layout)?;
    let counts = structure.counts();

    match structure.validate() {
        Ok(()) => {
            if json {
                let output = serde_json::json!({
                    "valid": true,
                    "folders": counts.folders,
                    "files": counts.files,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!(
                    "Layout is valid: {} folders, {} files",
                    counts.folders, counts.files
                );
            }
            Ok(())
        }
        Err(e) => {
            if json {
                let output = serde_json::json!({
                    "valid": false,
                    "code": e.code(),
                    "message": e.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            bail!("[{}] {e}", e.code())
        }
    }
}
