// ABOUTME: CLI argument parsing and command routing for genlab
//
// - No command: launches the wizard TUI
// - export: render the concept to markdown or plain text without the TUI
// - reset: delete the saved concept
// - path: print the storage location

pub mod export;
pub mod reset;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::concept::store::SNAPSHOT_FILE;
use crate::concept::ConceptStore;

/// Museum Genesis Lab - design museum concepts from your terminal
#[derive(Parser)]
#[command(name = "genlab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path of the saved concept file (defaults to ~/.genesis-lab/concept.json)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the wizard TUI (default if no command given)
    Tui,

    /// Render the saved concept without entering the TUI
    Export(ExportArgs),

    /// Delete the saved concept
    Reset(ResetArgs),

    /// Print the storage location of the saved concept
    Path,
}

/// Arguments for the export command
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Write the markdown file here instead of printing to stdout
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Print the plain-text digest instead of markdown
    #[arg(long)]
    pub text: bool,
}

/// Arguments for the reset command
#[derive(clap::Args)]
pub struct ResetArgs {
    /// Skip the confirmation requirement
    #[arg(long, short)]
    pub yes: bool,
}

/// Resolve the snapshot path from the CLI flags
pub fn store_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.store {
        Some(path) => Ok(path.clone()),
        None => Ok(ConceptStore::default_root()?.join(SNAPSHOT_FILE)),
    }
}
