// src/resolver/mod.rs

//! Dependency resolution over a component catalog
//!
//! The resolver gathers the transitive dependencies of a component up to a
//! depth bound, reduces duplicate entries into one constraint per name, and
//! classifies each direct dependency as satisfied or missing.
//!
//! Gathering does not track visited components. A dependency cycle is
//! expanded until the depth bound runs out, and the duplicates it produces
//! are folded together by [`DependencyResolver::reduce`].

mod plan;
mod usage;

pub use plan::{ComponentReport, ResolutionReport, TransitiveDependencies};
pub use usage::{UsageBuckets, UsageEntry, UsageIndex};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::version::{DependencyKind, VersionConstraint};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// Default recursion bound for [`DependencyResolver::gather`]
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Dependencies collected by [`DependencyResolver::gather`], duplicates included
#[derive(Debug, Clone, Default)]
pub struct GatheredDependencies {
    pub mandatory: Vec<VersionConstraint>,
    pub optional: Vec<VersionConstraint>,
}

impl GatheredDependencies {
    /// Total number of references, duplicates counted
    pub fn len(&self) -> usize {
        self.mandatory.len() + self.optional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mandatory.is_empty() && self.optional.is_empty()
    }

    /// All references, mandatory first
    pub fn into_combined(self) -> Vec<VersionConstraint> {
        let mut all = self.mandatory;
        all.extend(self.optional);
        all
    }
}

/// A direct dependency edge with its catalog classification
#[derive(Debug, Clone)]
pub struct DirectEdge {
    pub constraint: VersionConstraint,
    /// Whether the target exists in the catalog
    pub satisfied: bool,
}

/// Resolves dependencies against a read-only catalog
///
/// The resolver holds no mutable state; every call builds fresh output, so
/// several resolvers may share one catalog across threads.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'a> {
    catalog: &'a Catalog,
    max_depth: usize,
}

impl<'a> DependencyResolver<'a> {
    /// Create a resolver with the default depth bound
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Use a different depth bound
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Collect dependencies reachable from `name`, at most `max_depth` levels deep
    ///
    /// A component missing from the catalog yields nothing. With `max_depth`
    /// at zero only the direct references are returned. Otherwise every
    /// direct reference that exists in the catalog is expanded one level
    /// shallower: below a mandatory edge, mandatory stays mandatory and
    /// optional stays optional; below an optional edge, everything becomes
    /// optional. Mandatory status therefore needs an unbroken mandatory chain.
    pub fn gather(&self, name: &str, max_depth: usize) -> GatheredDependencies {
        let Some(component) = self.catalog.get(name) else {
            return GatheredDependencies::default();
        };
        trace!("Gathering '{}' at depth {}", name, max_depth);

        let mut gathered = GatheredDependencies {
            mandatory: component
                .mandatory_dependencies
                .iter()
                .map(|dep| dep.to_constraint(DependencyKind::Mandatory))
                .collect(),
            optional: component
                .optional_dependencies
                .iter()
                .map(|dep| dep.to_constraint(DependencyKind::Optional))
                .collect(),
        };

        if max_depth == 0 {
            debug!("Scan depth reached at '{}'", name);
            return gathered;
        }

        for dep in &component.mandatory_dependencies {
            if !self.catalog.contains(&dep.name) {
                continue;
            }
            let nested = self.gather(&dep.name, max_depth - 1);
            gathered.mandatory.extend(nested.mandatory);
            gathered.optional.extend(nested.optional);
        }

        for dep in &component.optional_dependencies {
            if !self.catalog.contains(&dep.name) {
                continue;
            }
            let nested = self.gather(&dep.name, max_depth - 1);
            gathered
                .optional
                .extend(nested.into_combined().into_iter().map(demote));
        }

        gathered
    }

    /// Fold references into one constraint per name (case-insensitive)
    ///
    /// The first occurrence of a name fixes its position and spelling; later
    /// occurrences are merged into it in order. The first failed merge aborts
    /// the whole reduction.
    pub fn reduce(&self, references: &[VersionConstraint]) -> Result<Vec<VersionConstraint>> {
        let mut reduced: Vec<VersionConstraint> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for reference in references {
            let key = reference.name.to_lowercase();
            match index.get(&key) {
                Some(&pos) => {
                    reduced[pos] = reduced[pos].merge(reference)?;
                }
                None => {
                    index.insert(key, reduced.len());
                    reduced.push(reference.clone());
                }
            }
        }

        Ok(reduced)
    }

    /// Gather and reduce the transitive dependencies of `name`
    ///
    /// Mandatory and optional references are reduced separately. A name that
    /// ends up in both lists is kept only as mandatory. Errors are wrapped in
    /// `Error::ResolutionFailed` naming the root component.
    pub fn resolve(&self, name: &str) -> Result<TransitiveDependencies> {
        let gathered = self.gather(name, self.max_depth);
        debug!(
            "Gathered {} references for '{}' ({} mandatory, {} optional)",
            gathered.len(),
            name,
            gathered.mandatory.len(),
            gathered.optional.len()
        );

        let mandatory = self
            .reduce(&gathered.mandatory)
            .map_err(|e| e.for_component(name))?;
        let optional = self
            .reduce(&gathered.optional)
            .map_err(|e| e.for_component(name))?;

        let optional = optional
            .into_iter()
            .filter(|opt| !mandatory.iter().any(|m| m.same_name(opt)))
            .collect();

        Ok(TransitiveDependencies { mandatory, optional })
    }

    /// Resolve every component in the catalog
    ///
    /// A failure for one root is recorded for that root only.
    pub fn resolve_all(&self) -> BTreeMap<String, Result<TransitiveDependencies>> {
        self.catalog
            .names()
            .map(|name| (name.to_string(), self.resolve(name)))
            .collect()
    }

    /// Direct dependencies of `name`, each marked satisfied or missing
    pub fn direct_edges(&self, name: &str) -> Vec<DirectEdge> {
        let Some(component) = self.catalog.get(name) else {
            return Vec::new();
        };

        let mandatory = component
            .mandatory_dependencies
            .iter()
            .map(|dep| dep.to_constraint(DependencyKind::Mandatory));
        let optional = component
            .optional_dependencies
            .iter()
            .map(|dep| dep.to_constraint(DependencyKind::Optional));

        mandatory
            .chain(optional)
            .map(|constraint| DirectEdge {
                satisfied: self.catalog.contains(&constraint.name),
                constraint,
            })
            .collect()
    }

    /// Build the usage index and resolve every component into a report
    pub fn report(&self) -> ResolutionReport {
        let usage = UsageIndex::build(self);
        let mut transitive = self.resolve_all();
        let mut report = ResolutionReport {
            unused_libraries: usage.unused_libraries(self.catalog),
            ..Default::default()
        };

        for component in self.catalog.iter() {
            let entry = usage.get(&component.name).cloned().unwrap_or_default();
            let (resolved, failure) = match transitive.remove(&component.name) {
                Some(Ok(deps)) => (Some(deps), None),
                Some(Err(e)) => {
                    debug!("{}", e);
                    (None, Some(error_chain(&e)))
                }
                None => (None, None),
            };

            report.components.insert(
                component.name.clone(),
                ComponentReport {
                    title: component.title.clone(),
                    is_library: component.is_library(),
                    satisfied_mandatory: entry.uses.mandatory.keys().cloned().collect(),
                    satisfied_optional: entry.uses.optional.keys().cloned().collect(),
                    missing_mandatory: entry.uses.mandatory_missing.into_values().collect(),
                    missing_optional: entry.uses.optional_missing.into_values().collect(),
                    used_by_mandatory: entry.used_by.mandatory.keys().cloned().collect(),
                    used_by_optional: entry.used_by.optional.keys().cloned().collect(),
                    transitive: resolved,
                    failure,
                },
            );
        }

        report
    }
}

fn demote(mut constraint: VersionConstraint) -> VersionConstraint {
    constraint.kind = DependencyKind::Optional;
    constraint
}

/// Render an error without its `ResolutionFailed` wrapper, component included
fn error_chain(error: &Error) -> String {
    match error {
        Error::ResolutionFailed { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
