// src/error.rs

//! Error types for addonscan

use crate::version::DependencyKind;
use thiserror::Error;

/// Errors produced by the library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading the catalog or a config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of a report failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A directory or component was not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Two constraints were merged that do not describe the same dependency
    #[error(
        "Constraint mismatch: cannot merge '{name}' ({kind}) with '{other}' ({other_kind})"
    )]
    ConstraintMismatch {
        name: String,
        other: String,
        kind: DependencyKind,
        other_kind: DependencyKind,
    },

    /// Merged version bounds cannot both hold
    #[error("Version conflict for '{dependency}': minimum {min} is above maximum {max}")]
    VersionConflict {
        dependency: String,
        min: String,
        max: String,
    },

    /// Transitive reduction for a root component failed
    #[error("Resolution of '{component}' failed: {source}")]
    ResolutionFailed {
        component: String,
        #[source]
        source: Box<Error>,
    },
}

/// Result type for addonscan operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a reduction error with the root component it was raised for
    pub fn for_component(self, component: &str) -> Self {
        Error::ResolutionFailed {
            component: component.to_string(),
            source: Box::new(self),
        }
    }
}
