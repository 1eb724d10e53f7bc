// src/cli.rs
//! CLI definitions for addonscan
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "addonscan")]
#[command(author = "Addonscan Contributors")]
#[command(version)]
#[command(
    about = "Check add-on dependencies: missing, transitive, and unused libraries",
    long_about = None
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: $ADDONSCAN_CONFIG or the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by commands that load a catalog
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Add-on root directory (overrides the config file)
    #[arg(short, long)]
    pub root: Option<PathBuf>,
}

/// Output format selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the add-on directory and print the full dependency report
    Scan {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Maximum depth for transitive dependency gathering
        #[arg(short, long)]
        depth: Option<usize>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Skip the per-component dependency matrix
        #[arg(long)]
        no_matrix: bool,
    },

    /// Show the reduced transitive dependencies of one component
    Deps {
        /// Component name
        component: String,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Maximum depth for transitive dependency gathering
        #[arg(short, long)]
        depth: Option<usize>,
    },

    /// Show the manifest details of one component
    Info {
        /// Component name
        component: String,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// List libraries that no other component uses
    Unused {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
