// src/main.rs

mod cli;
mod commands;

use addonscan::ScanConfig;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // Initialize tracing subscriber for logging; RUST_LOG wins over -v
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Commands::Completions { shell } = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "addonscan", &mut io::stdout());
        return Ok(());
    }

    let config =
        ScanConfig::discover(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Scan {
            catalog,
            depth,
            format,
            no_matrix,
        } => commands::cmd_scan(&catalog, depth, format, no_matrix, &config),
        Commands::Deps {
            component,
            catalog,
            depth,
        } => commands::cmd_deps(&component, &catalog, depth, &config),
        Commands::Info { component, catalog } => commands::cmd_info(&component, &catalog, &config),
        Commands::Unused { catalog } => commands::cmd_unused(&catalog, &config),
        Commands::Completions { .. } => Ok(()),
    }
}
