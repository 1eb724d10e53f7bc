// src/version/mod.rs

//! Version constraints for add-on dependencies
//!
//! Version bounds are opaque strings. They are never parsed as numbers or
//! semantic versions; two bounds are compared by plain ordinal (byte-wise)
//! string ordering, so `"10"` sorts before `"9"`.

use crate::error::{Error, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// How a dependency was declared or reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Must be present for the component to work
    Mandatory,
    /// Enhances the component if present
    Optional,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyKind::Mandatory => write!(f, "mandatory"),
            DependencyKind::Optional => write!(f, "optional"),
        }
    }
}

/// A named dependency with optional inclusive version bounds
///
/// Equality and ordering look at the name only, case-insensitively, so that
/// entries for the same dependency collapse together during reduction.
#[derive(Debug, Clone, Serialize)]
pub struct VersionConstraint {
    pub name: String,
    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
    /// Inclusive upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_version: Option<String>,
    pub kind: DependencyKind,
}

impl VersionConstraint {
    /// Create an unbounded constraint
    pub fn new(name: impl Into<String>, kind: DependencyKind) -> Self {
        Self {
            name: name.into(),
            min_version: None,
            max_version: None,
            kind,
        }
    }

    /// Set the inclusive lower bound
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min_version = Some(min.into());
        self
    }

    /// Set the inclusive upper bound
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max_version = Some(max.into());
        self
    }

    pub fn is_mandatory(&self) -> bool {
        self.kind == DependencyKind::Mandatory
    }

    /// Case-insensitive name comparison
    pub fn same_name(&self, other: &VersionConstraint) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }

    /// Merge another constraint on the same dependency into this one
    ///
    /// Both sides must share the name (case-insensitive) and the kind, else
    /// `Error::ConstraintMismatch`. Each bound takes the tighter value: the
    /// larger minimum and the smaller maximum. A result whose minimum is above
    /// its maximum is rejected with `Error::VersionConflict`.
    pub fn merge(&self, other: &VersionConstraint) -> Result<VersionConstraint> {
        if !self.same_name(other) || self.kind != other.kind {
            return Err(Error::ConstraintMismatch {
                name: self.name.clone(),
                other: other.name.clone(),
                kind: self.kind,
                other_kind: other.kind,
            });
        }

        let min_version = tighter(&self.min_version, &other.min_version, Ordering::Greater);
        let max_version = tighter(&self.max_version, &other.max_version, Ordering::Less);

        if let (Some(min), Some(max)) = (&min_version, &max_version) {
            if min > max {
                return Err(Error::VersionConflict {
                    dependency: self.name.clone(),
                    min: min.clone(),
                    max: max.clone(),
                });
            }
        }

        Ok(VersionConstraint {
            name: self.name.clone(),
            min_version,
            max_version,
            kind: self.kind,
        })
    }
}

/// Pick the bound that wins in `prefer` direction when both are present
fn tighter(a: &Option<String>, b: &Option<String>, prefer: Ordering) -> Option<String> {
    match (a, b) {
        (Some(x), Some(y)) => {
            if y.cmp(x) == prefer {
                Some(y.clone())
            } else {
                Some(x.clone())
            }
        }
        (Some(x), None) => Some(x.clone()),
        (None, Some(y)) => Some(y.clone()),
        (None, None) => None,
    }
}

impl PartialEq for VersionConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.same_name(other)
    }
}

impl Eq for VersionConstraint {}

impl Ord for VersionConstraint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }
}

impl PartialOrd for VersionConstraint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionConstraint {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(c: &VersionConstraint) -> (Option<&str>, Option<&str>) {
        (c.min_version.as_deref(), c.max_version.as_deref())
    }

    #[test]
    fn test_merge_with_self_is_idempotent() {
        let c = VersionConstraint::new("LibAddonMenu", DependencyKind::Mandatory)
            .with_min("30")
            .with_max("40");
        let merged = c.merge(&c).unwrap();
        assert_eq!(bounds(&merged), (Some("30"), Some("40")));
    }

    #[test]
    fn test_merge_is_commutative() {
        let a = VersionConstraint::new("LibGPS", DependencyKind::Optional).with_min("2");
        let b = VersionConstraint::new("libgps", DependencyKind::Optional)
            .with_min("3")
            .with_max("8");
        let ab = a.merge(&b).unwrap();
        let ba = b.merge(&a).unwrap();
        assert_eq!(bounds(&ab), bounds(&ba));
        assert_eq!(bounds(&ab), (Some("3"), Some("8")));
    }

    #[test]
    fn test_merge_takes_tighter_bounds() {
        let a = VersionConstraint::new("Lib", DependencyKind::Mandatory)
            .with_min("1")
            .with_max("9");
        let b = VersionConstraint::new("Lib", DependencyKind::Mandatory)
            .with_min("4")
            .with_max("6");
        let merged = a.merge(&b).unwrap();
        assert_eq!(bounds(&merged), (Some("4"), Some("6")));
    }

    #[test]
    fn test_merge_one_sided_bounds() {
        let a = VersionConstraint::new("Lib", DependencyKind::Mandatory).with_max("7");
        let b = VersionConstraint::new("Lib", DependencyKind::Mandatory);
        let merged = b.merge(&a).unwrap();
        assert_eq!(bounds(&merged), (None, Some("7")));
    }

    #[test]
    fn test_merge_conflict_detected() {
        let a = VersionConstraint::new("Lib", DependencyKind::Mandatory).with_min("5");
        let b = VersionConstraint::new("Lib", DependencyKind::Mandatory).with_max("3");
        match a.merge(&b) {
            Err(Error::VersionConflict { dependency, min, max }) => {
                assert_eq!(dependency, "Lib");
                assert_eq!(min, "5");
                assert_eq!(max, "3");
            }
            other => panic!("expected VersionConflict, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_compares_lexically() {
        // "10" < "9" as strings, so 10 is the tighter maximum
        let a = VersionConstraint::new("Lib", DependencyKind::Mandatory).with_max("9");
        let b = VersionConstraint::new("Lib", DependencyKind::Mandatory).with_max("10");
        let merged = a.merge(&b).unwrap();
        assert_eq!(merged.max_version.as_deref(), Some("10"));
    }

    #[test]
    fn test_merge_rejects_different_names() {
        let a = VersionConstraint::new("LibA", DependencyKind::Mandatory);
        let b = VersionConstraint::new("LibB", DependencyKind::Mandatory);
        assert!(matches!(a.merge(&b), Err(Error::ConstraintMismatch { .. })));
    }

    #[test]
    fn test_merge_rejects_different_kinds() {
        let a = VersionConstraint::new("Lib", DependencyKind::Mandatory);
        let b = VersionConstraint::new("Lib", DependencyKind::Optional);
        assert!(matches!(a.merge(&b), Err(Error::ConstraintMismatch { .. })));
    }

    #[test]
    fn test_equality_ignores_case_and_bounds() {
        let a = VersionConstraint::new("LibStub", DependencyKind::Mandatory).with_min("1");
        let b = VersionConstraint::new("libstub", DependencyKind::Optional);
        assert_eq!(a, b);
        assert!(VersionConstraint::new("abc", DependencyKind::Optional) < a);
    }

    #[test]
    fn test_constraint_display() {
        let c = VersionConstraint::new("Lib", DependencyKind::Mandatory)
            .with_min("2")
            .with_max("5");
        assert_eq!(c.to_string(), "Lib >= 2 <= 5");
        assert_eq!(
            VersionConstraint::new("Lib", DependencyKind::Optional).to_string(),
            "Lib"
        );
    }
}
