// src/commands/query.rs

//! Single-component queries
//!
//! Functions for showing one component's transitive dependencies, its
//! manifest details, and the list of unused libraries.

use super::{load_catalog, resolve_depth};
use crate::cli::CatalogArgs;
use addonscan::report;
use addonscan::{DependencyResolver, ScanConfig, UsageIndex};
use anyhow::Result;
use tracing::info;

/// Show the reduced transitive dependencies of a component
pub fn cmd_deps(
    component: &str,
    args: &CatalogArgs,
    depth: Option<usize>,
    config: &ScanConfig,
) -> Result<()> {
    let depth = resolve_depth(depth, config)?;
    let catalog = load_catalog(args, config)?;
    if !catalog.contains(component) {
        anyhow::bail!("Component '{}' not found", component);
    }

    info!("Resolving dependencies of '{}' (depth {})", component, depth);
    let resolver = DependencyResolver::new(&catalog).with_max_depth(depth);
    let deps = resolver.resolve(component)?;
    print!("{}", report::render_transitive(component, &deps));

    let missing: Vec<String> = resolver
        .direct_edges(component)
        .into_iter()
        .filter(|edge| !edge.satisfied)
        .map(|edge| format!("{} [{}]", edge.constraint, edge.constraint.kind))
        .collect();
    if !missing.is_empty() {
        println!("Missing direct dependencies:");
        for line in missing {
            println!("  {}", line);
        }
    }

    Ok(())
}

/// Show manifest details of a component
pub fn cmd_info(component: &str, args: &CatalogArgs, config: &ScanConfig) -> Result<()> {
    let catalog = load_catalog(args, config)?;
    let descriptor = catalog
        .get(component)
        .ok_or_else(|| anyhow::anyhow!("Component '{}' not found", component))?;

    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    let names = |deps: &[addonscan::DependencyRef]| {
        let mut names: Vec<String> = deps.iter().map(|d| d.to_string()).collect();
        names.sort();
        names.join(", ")
    };

    println!("{:20}: {}", "Title", descriptor.title);
    println!("{:20}: {}", "Description", descriptor.description);
    println!("{:20}: {}", "Version", descriptor.version);
    println!("{:20}: {}", "Last updated", descriptor.last_updated);
    println!("{:20}: {}", "AddOnVersion", descriptor.addon_version);
    println!("{:20}: {}", "API Versions", descriptor.api_versions.join(", "));
    println!("{:20}: {}", "Author", descriptor.author);
    println!("{:20}: {}", "Contributors", descriptor.contributors.join(", "));
    println!("{:20}: {}", "Is library", yes_no(descriptor.is_library()));
    println!("{:20}: {}", "Has saved variables", yes_no(descriptor.saved_variables));
    println!("{:20}: {}", "Mandatory", names(&descriptor.mandatory_dependencies));
    println!("{:20}: {}", "Optional", names(&descriptor.optional_dependencies));
    for warning in &descriptor.warnings {
        println!("{:20}: {}", "Warning", warning);
    }

    Ok(())
}

/// List libraries no other component uses
///
/// Usage is based on direct edges only, so no depth bound applies.
pub fn cmd_unused(args: &CatalogArgs, config: &ScanConfig) -> Result<()> {
    let catalog = load_catalog(args, config)?;
    let index = UsageIndex::build(&DependencyResolver::new(&catalog));

    let unused = index.unused_libraries(&catalog);
    if unused.is_empty() {
        println!("Every library is used by at least one component");
        return Ok(());
    }

    println!("Libraries not used by any other component:");
    for name in &unused {
        let title = catalog.get(name).map_or(name.as_str(), |c| c.title.as_str());
        println!("  {}", title);
    }
    println!("\nTotal: {} unused libraries", unused.len());
    Ok(())
}
