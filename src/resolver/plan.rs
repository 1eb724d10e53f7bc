// src/resolver/plan.rs

//! Resolution result data structures
//!
//! These are the plain data handed to the reporter. Nothing here formats text.

use crate::version::VersionConstraint;
use serde::Serialize;
use std::collections::BTreeMap;

/// Reduced transitive dependencies of one root component
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransitiveDependencies {
    /// Reachable through an unbroken chain of mandatory edges
    pub mandatory: Vec<VersionConstraint>,
    /// Reachable only through at least one optional edge
    pub optional: Vec<VersionConstraint>,
}

/// Everything reported about a single component
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentReport {
    pub title: String,
    pub is_library: bool,
    pub satisfied_mandatory: Vec<String>,
    pub satisfied_optional: Vec<String>,
    pub missing_mandatory: Vec<VersionConstraint>,
    pub missing_optional: Vec<VersionConstraint>,
    pub used_by_mandatory: Vec<String>,
    pub used_by_optional: Vec<String>,
    /// Reduced transitive closure, absent when the reduction failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitive: Option<TransitiveDependencies>,
    /// Why the transitive reduction failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Result of one resolution run over a whole catalog
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolutionReport {
    pub components: BTreeMap<String, ComponentReport>,
    pub unused_libraries: Vec<String>,
}

impl ResolutionReport {
    /// Components with at least one missing mandatory dependency
    pub fn with_missing_mandatory(&self) -> impl Iterator<Item = (&str, &ComponentReport)> {
        self.components
            .iter()
            .filter(|(_, c)| !c.missing_mandatory.is_empty())
            .map(|(name, c)| (name.as_str(), c))
    }

    /// Components with at least one missing optional dependency
    pub fn with_missing_optional(&self) -> impl Iterator<Item = (&str, &ComponentReport)> {
        self.components
            .iter()
            .filter(|(_, c)| !c.missing_optional.is_empty())
            .map(|(name, c)| (name.as_str(), c))
    }

    /// Components whose transitive reduction failed
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.components
            .iter()
            .filter_map(|(name, c)| c.failure.as_deref().map(|f| (name.as_str(), f)))
    }
}
