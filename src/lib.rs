// src/lib.rs

//! Addonscan
//!
//! Dependency checker for add-on folders. Each add-on ships a manifest that
//! declares mandatory and optional dependencies, optionally with minimum and
//! maximum versions.
//!
//! # Architecture
//!
//! - Catalog: every add-on manifest under a root directory, keyed by name
//! - Resolver: depth-bounded transitive gathering plus constraint reduction
//! - Usage index: direct "uses" / "used by" edges, satisfied or missing
//! - Reporter: text or JSON rendering of the resolver's plain data

pub mod catalog;
pub mod config;
pub mod descriptor;
mod error;
pub mod report;
pub mod resolver;
pub mod version;

pub use catalog::Catalog;
pub use config::{ReportFormat, ScanConfig};
pub use descriptor::{
    ComponentDescriptor, DependencyRef, ParseWarning, parse_dependency_string, parse_descriptor,
    strip_color_codes,
};
pub use error::{Error, Result};
pub use resolver::{
    ComponentReport, DEFAULT_MAX_DEPTH, DependencyResolver, GatheredDependencies,
    ResolutionReport, TransitiveDependencies, UsageIndex,
};
pub use version::{DependencyKind, VersionConstraint};
