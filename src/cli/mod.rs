//! Command-line interface for Resumake.

pub mod commands;

use clap::{Parser, Subcommand};

use crate::models::CodeCategory;

/// Resumake - résumé builder service
/// Multi-step résumé authoring with JSON-file persistence
#[derive(Parser)]
#[command(name = "resumake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    #[command(alias = "-s", alias = "--serve")]
    Serve,

    /// List all stored résumés
    #[command(alias = "ls", alias = "l")]
    List,

    /// Show details of a stored résumé
    #[command(alias = "i")]
    Info {
        /// Résumé ID
        id: String,
    },

    /// Delete a stored résumé
    #[command(alias = "rm", alias = "r")]
    Remove {
        /// Résumé ID to delete
        id: String,
    },

    /// Manage common-code reference tables
    Codes {
        #[command(subcommand)]
        command: CodeCommands,
    },

    /// Create a default config file
    #[command(alias = "--init")]
    Init,
}

#[derive(Subcommand)]
pub enum CodeCommands {
    /// List codes, optionally filtered by category
    #[command(alias = "ls")]
    List {
        /// Category: degree, graduationStatus or position
        #[arg(long)]
        category: Option<CodeCategory>,

        /// Include inactive codes
        #[arg(long)]
        all: bool,
    },

    /// Restore the built-in default code set
    Seed,
}
