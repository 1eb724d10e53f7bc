// src/descriptor/mod.rs

//! Component descriptors
//!
//! A component descriptor is the parsed manifest of one add-on: its name,
//! display metadata, and the mandatory and optional dependencies it declares.
//! Descriptors are created once by the catalog loader and never mutated by
//! the resolver.

mod color;
pub mod parser;

pub use color::{COLOR_MARKER, strip_color_codes};
pub use parser::{DATA_DESIGNATOR, ParseWarning, parse_descriptor};

use crate::version::{DependencyKind, VersionConstraint};
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Prefix that marks a component as a library when not declared explicitly
const LIBRARY_PREFIX: &str = "lib";

/// One dependency as written in a `DependsOn`/`OptionalDependsOn` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_version: Option<String>,
}

impl DependencyRef {
    /// Parse a single token such as `LibFoo>=12` or `LibFoo>=1<=3`
    ///
    /// The name ends at the first operator. Each bound runs from its operator
    /// to the next operator or the end of the token, so the operator order
    /// does not matter. Empty bounds are treated as absent.
    pub fn parse(token: &str) -> Self {
        let ge = token.find(">=");
        let le = token.find("<=");

        let name_end = match (ge, le) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => token.len(),
        };

        Self {
            name: token[..name_end].to_string(),
            min_version: ge.and_then(|pos| bound_after(token, pos, le)),
            max_version: le.and_then(|pos| bound_after(token, pos, ge)),
        }
    }

    /// Convert to a constraint tagged with how it was reached
    pub fn to_constraint(&self, kind: DependencyKind) -> VersionConstraint {
        VersionConstraint {
            name: self.name.clone(),
            min_version: self.min_version.clone(),
            max_version: self.max_version.clone(),
            kind,
        }
    }
}

/// Text following the operator at `pos`, up to the other operator if it comes later
fn bound_after(token: &str, pos: usize, other: Option<usize>) -> Option<String> {
    let start = pos + 2;
    let end = match other {
        Some(o) if o > pos => o,
        _ => token.len(),
    };
    let value = &token[start..end];
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ref min) = self.min_version {
            write!(f, " >= {}", min)?;
        }
        if let Some(ref max) = self.max_version {
            write!(f, " <= {}", max)?;
        }
        Ok(())
    }
}

/// Parse a space-separated dependency declaration
///
/// Empty input, or input made only of spaces, yields no references.
pub fn parse_dependency_string(declaration: &str) -> Vec<DependencyRef> {
    declaration
        .split_whitespace()
        .map(DependencyRef::parse)
        .filter(|dep| !dep.name.is_empty())
        .collect()
}

/// Parsed manifest of a single component
#[derive(Debug, Clone, Default)]
pub struct ComponentDescriptor {
    /// Unique identifier, taken from the manifest file stem
    pub name: String,
    /// Display name, color directives removed
    pub title: String,
    pub author: String,
    pub contributors: Vec<String>,
    pub description: String,
    pub version: String,
    pub addon_version: String,
    pub api_versions: Vec<String>,
    pub last_updated: String,
    pub saved_variables: bool,
    pub mandatory_dependencies: Vec<DependencyRef>,
    pub optional_dependencies: Vec<DependencyRef>,
    /// Value of an explicit `IsLibrary` field, if any
    pub declared_library: Option<bool>,
    /// Unknown fields met while parsing
    pub warnings: Vec<ParseWarning>,
    inferred_library: OnceLock<bool>,
}

impl ComponentDescriptor {
    /// Create an empty descriptor whose title defaults to its name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            ..Default::default()
        }
    }

    /// Builder-style mandatory dependencies from a declaration string
    pub fn with_depends_on(mut self, declaration: &str) -> Self {
        self.mandatory_dependencies = parse_dependency_string(declaration);
        self
    }

    /// Builder-style optional dependencies from a declaration string
    pub fn with_optional_depends_on(mut self, declaration: &str) -> Self {
        self.optional_dependencies = parse_dependency_string(declaration);
        self
    }

    /// Builder-style explicit library flag
    pub fn with_library(mut self, library: bool) -> Self {
        self.declared_library = Some(library);
        self
    }

    /// Set the title, removing color directives
    pub fn set_title(&mut self, value: &str) {
        self.title = strip_color_codes(value);
    }

    /// Whether this component is a library
    ///
    /// An explicit `IsLibrary` declaration always wins. Otherwise the
    /// component counts as a library when its name or title starts with
    /// "lib" (any case); that guess is computed on first use and cached.
    pub fn is_library(&self) -> bool {
        if let Some(declared) = self.declared_library {
            return declared;
        }
        *self.inferred_library.get_or_init(|| {
            starts_with_library_prefix(&self.name) || starts_with_library_prefix(&self.title)
        })
    }

    /// Mandatory references followed by optional references
    pub fn combined_dependencies(&self) -> Vec<&DependencyRef> {
        self.mandatory_dependencies
            .iter()
            .chain(self.optional_dependencies.iter())
            .collect()
    }
}

fn starts_with_library_prefix(text: &str) -> bool {
    text.to_lowercase().starts_with(LIBRARY_PREFIX)
}
