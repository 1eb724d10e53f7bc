// src/resolver/usage.rs

//! Bidirectional usage index
//!
//! For every component the index records what it uses and what uses it,
//! based on direct (depth one) edges only. Targets absent from the catalog
//! land in the source's `*_missing` buckets and nowhere else.

use super::DependencyResolver;
use crate::catalog::Catalog;
use crate::version::{DependencyKind, VersionConstraint};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Four buckets keyed by the component on the other end of the edge
#[derive(Debug, Clone, Default, Serialize)]
pub struct UsageBuckets {
    pub mandatory: BTreeMap<String, VersionConstraint>,
    pub optional: BTreeMap<String, VersionConstraint>,
    pub mandatory_missing: BTreeMap<String, VersionConstraint>,
    pub optional_missing: BTreeMap<String, VersionConstraint>,
}

impl UsageBuckets {
    /// Whether the satisfied buckets are both empty
    pub fn no_satisfied(&self) -> bool {
        self.mandatory.is_empty() && self.optional.is_empty()
    }

    fn bucket_mut(
        &mut self,
        kind: DependencyKind,
        satisfied: bool,
    ) -> &mut BTreeMap<String, VersionConstraint> {
        match (kind, satisfied) {
            (DependencyKind::Mandatory, true) => &mut self.mandatory,
            (DependencyKind::Optional, true) => &mut self.optional,
            (DependencyKind::Mandatory, false) => &mut self.mandatory_missing,
            (DependencyKind::Optional, false) => &mut self.optional_missing,
        }
    }
}

/// Usage of one component in both directions
#[derive(Debug, Clone, Default, Serialize)]
pub struct UsageEntry {
    pub uses: UsageBuckets,
    pub used_by: UsageBuckets,
}

/// Per-component usage, derived fresh for each resolution run
#[derive(Debug, Clone, Default, Serialize)]
pub struct UsageIndex {
    entries: BTreeMap<String, UsageEntry>,
}

impl UsageIndex {
    /// Build the index from the resolver's direct-edge classification
    ///
    /// A target declared twice by the same component keeps its first entry.
    pub fn build(resolver: &DependencyResolver<'_>) -> Self {
        let catalog = resolver.catalog();
        let mut entries: BTreeMap<String, UsageEntry> = catalog
            .names()
            .map(|name| (name.to_string(), UsageEntry::default()))
            .collect();

        for source in catalog.names() {
            for edge in resolver.direct_edges(source) {
                let target = edge.constraint.name.clone();
                let kind = edge.constraint.kind;

                if edge.satisfied {
                    if let Some(entry) = entries.get_mut(&target) {
                        entry
                            .used_by
                            .bucket_mut(kind, true)
                            .entry(source.to_string())
                            .or_insert_with(|| edge.constraint.clone());
                    }
                }

                if let Some(entry) = entries.get_mut(source) {
                    entry
                        .uses
                        .bucket_mut(kind, edge.satisfied)
                        .entry(target)
                        .or_insert(edge.constraint);
                }
            }
        }

        debug!("Built usage index for {} components", entries.len());
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&UsageEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UsageEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Libraries that no other component uses, mandatory or optional
    pub fn unused_libraries(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .iter()
            .filter(|component| component.is_library())
            .filter(|component| {
                self.entries
                    .get(&component.name)
                    .is_none_or(|entry| entry.used_by.no_satisfied())
            })
            .map(|component| component.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ComponentDescriptor;

    fn index_for(catalog: &Catalog) -> UsageIndex {
        UsageIndex::build(&DependencyResolver::new(catalog))
    }

    #[test]
    fn test_satisfied_edges_recorded_both_ways() {
        let catalog = Catalog::from_descriptors(vec![
            ComponentDescriptor::new("App")
                .with_depends_on("LibA>=2")
                .with_optional_depends_on("LibB"),
            ComponentDescriptor::new("LibA"),
            ComponentDescriptor::new("LibB"),
        ]);
        let index = index_for(&catalog);

        let app = index.get("App").unwrap();
        assert!(app.uses.mandatory.contains_key("LibA"));
        assert!(app.uses.optional.contains_key("LibB"));
        assert_eq!(app.uses.mandatory["LibA"].min_version.as_deref(), Some("2"));

        let lib_a = index.get("LibA").unwrap();
        assert!(lib_a.used_by.mandatory.contains_key("App"));
        let lib_b = index.get("LibB").unwrap();
        assert!(lib_b.used_by.optional.contains_key("App"));
    }

    #[test]
    fn test_missing_edges_only_on_source() {
        let catalog = Catalog::from_descriptors(vec![
            ComponentDescriptor::new("App")
                .with_depends_on("Foo")
                .with_optional_depends_on("Bar"),
        ]);
        let index = index_for(&catalog);
        let app = index.get("App").unwrap();
        assert!(app.uses.mandatory_missing.contains_key("Foo"));
        assert!(!app.uses.mandatory.contains_key("Foo"));
        assert!(app.uses.optional_missing.contains_key("Bar"));
        assert!(index.get("Foo").is_none());
    }

    #[test]
    fn test_only_direct_edges_counted() {
        let catalog = Catalog::from_descriptors(vec![
            ComponentDescriptor::new("A").with_depends_on("B"),
            ComponentDescriptor::new("B").with_depends_on("C"),
            ComponentDescriptor::new("C"),
        ]);
        let index = index_for(&catalog);
        let a = index.get("A").unwrap();
        assert_eq!(a.uses.mandatory.keys().collect::<Vec<_>>(), vec!["B"]);
        let c = index.get("C").unwrap();
        assert_eq!(c.used_by.mandatory.keys().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn test_unused_libraries() {
        let catalog = Catalog::from_descriptors(vec![
            ComponentDescriptor::new("App").with_optional_depends_on("LibUsed"),
            ComponentDescriptor::new("LibUsed"),
            ComponentDescriptor::new("LibIdle"),
            ComponentDescriptor::new("Helper").with_library(true),
            ComponentDescriptor::new("LibNotReally").with_library(false),
        ]);
        let index = index_for(&catalog);
        assert_eq!(
            index.unused_libraries(&catalog),
            vec!["Helper".to_string(), "LibIdle".to_string()]
        );
    }
}
