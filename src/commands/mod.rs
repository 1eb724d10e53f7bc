// src/commands/mod.rs
//! Command handlers for the addonscan CLI

mod query;
mod scan;

pub use query::{cmd_deps, cmd_info, cmd_unused};
pub use scan::cmd_scan;

use crate::cli::CatalogArgs;
use addonscan::{Catalog, ScanConfig};
use anyhow::{Context, Result};
use tracing::debug;

/// Load the catalog named by the CLI flags or the config file
pub(crate) fn load_catalog(args: &CatalogArgs, config: &ScanConfig) -> Result<Catalog> {
    let root = args
        .root
        .clone()
        .or_else(|| config.scan.root.clone())
        .context("No add-on directory given: pass --root or set scan.root in the config file")?;
    debug!("Using add-on root {}", root.display());

    Catalog::load_dir(&root)
        .with_context(|| format!("Failed to load add-ons from {}", root.display()))
}

/// Depth bound from `--depth`, else from the config file
pub(crate) fn resolve_depth(depth: Option<usize>, config: &ScanConfig) -> Result<usize> {
    let depth = depth.unwrap_or(config.scan.max_depth);
    if depth == 0 {
        anyhow::bail!("--depth must be at least 1");
    }
    Ok(depth)
}
