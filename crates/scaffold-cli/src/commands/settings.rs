//! Settings CLI commands
//!
//! Handles: scaffold settings show/vault/location

use anyhow::{bail, Context, Result};
use clap::{Subcommand, ValueEnum};
use scaffold_core::{NewFileLocation, Settings};
use std::path::{Path, PathBuf};

/// Settings commands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the default vault directory
    Vault {
        /// Vault directory
        path: PathBuf,
    },
    /// Set where layouts are created when no --base is given
    Location {
        /// Location kind
        #[arg(value_enum)]
        location: LocationArg,
        /// Vault folder, required for `folder`
        #[arg(long)]
        folder: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LocationArg {
    /// Vault root
    Root,
    /// Folder of the active note
    Current,
    /// A fixed vault folder
    Folder,
}

impl From<LocationArg> for NewFileLocation {
    fn from(arg: LocationArg) -> Self {
        match arg {
            LocationArg::Root => Self::Root,
            LocationArg::Current => Self::Current,
            LocationArg::Folder => Self::Folder,
        }
    }
}

pub fn execute(action: SettingsCommands, settings_path: &Path) -> Result<()> {
    let mut settings = Settings::load(settings_path)?;

    let message = match action {
        SettingsCommands::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                print_settings(&settings, settings_path);
            }
            return Ok(());
        }
        SettingsCommands::Vault { path } => {
            let vault = path
                .canonicalize()
                .with_context(|| format!("Vault directory not found: {}", path.display()))?;
            if !vault.is_dir() {
                bail!("Not a directory: {}", vault.display());
            }
            let message = format!("Default vault set to {}", vault.display());
            settings.vault = Some(vault);
            message
        }
        SettingsCommands::Location { location, folder } => {
            if matches!(location, LocationArg::Folder) {
                let Some(folder) = folder else {
                    bail!("--folder is required when location is 'folder'");
                };
                settings.new_file_folder = folder;
            }
            settings.new_file_location = location.into();
            format!("New file location set to {location:?}")
        }
    };

    settings.save(settings_path)?;
    println!("{message}");
    Ok(())
}

fn print_settings(settings: &Settings, settings_path: &Path) {
    println!("Settings file: {}", settings_path.display());
    match &settings.vault {
        Some(vault) => println!("Vault: {}", vault.display()),
        None => println!("Vault: (current directory)"),
    }
    match settings.new_file_location {
        NewFileLocation::Root => println!("New file location: vault root"),
        NewFileLocation::Current => println!("New file location: folder of the active note"),
        NewFileLocation::Folder => {
            println!("New file location: folder '{}'", settings.new_file_folder);
        }
    }
}
