//! Scaffold CLI - create vault folders and notes from a JSON layout
//!
//! Provides `scaffold apply`, `scaffold check` and `scaffold settings`.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::apply::ApplyArgs;
use commands::settings::SettingsCommands;

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Scaffold - create vault folders and notes from a JSON layout")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (defaults to ~/.scaffold/settings.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the folders and notes described by a JSON layout
    Apply(ApplyArgs),
    /// Validate a JSON layout without touching the vault
    Check {
        /// Layout document
        #[arg(value_name = "FILE")]
        layout: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = match cli.config {
        Some(path) => path,
        None => default_settings_path()?,
    };

    match cli.command {
        Commands::Apply(args) => commands::apply::execute(&args, &settings_path),
        Commands::Check { layout, json } => commands::check::execute(&layout, json),
        Commands::Settings { action } => commands::settings::execute(action, &settings_path),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_settings_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Home directory not found")?;
    Ok(home.join(".scaffold").join("settings.json"))
}
