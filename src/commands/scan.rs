// src/commands/scan.rs

//! Full catalog scan

use super::{load_catalog, resolve_depth};
use crate::cli::{CatalogArgs, OutputFormat};
use addonscan::report::{self, TextOptions};
use addonscan::{DependencyResolver, ReportFormat, ScanConfig};
use anyhow::Result;
use tracing::{info, warn};

/// Load the catalog, resolve every component, and print the report
pub fn cmd_scan(
    args: &CatalogArgs,
    depth: Option<usize>,
    format: Option<OutputFormat>,
    no_matrix: bool,
    config: &ScanConfig,
) -> Result<()> {
    let depth = resolve_depth(depth, config)?;
    let catalog = load_catalog(args, config)?;
    let resolver = DependencyResolver::new(&catalog).with_max_depth(depth);
    let report = resolver.report();

    let failures = report.failures().count();
    if failures > 0 {
        warn!("{} components have contradictory version constraints", failures);
    }
    info!(
        "Resolved {} components, {} unused libraries",
        report.components.len(),
        report.unused_libraries.len()
    );

    let format = match format {
        Some(OutputFormat::Json) => ReportFormat::Json,
        Some(OutputFormat::Text) => ReportFormat::Text,
        None => config.report.format,
    };

    match format {
        ReportFormat::Json => println!("{}", report::render_json(&report)?),
        ReportFormat::Text => {
            let options = TextOptions {
                show_matrix: config.report.show_matrix && !no_matrix,
            };
            print!("{}", report::render_text(&report, options));
        }
    }

    Ok(())
}
