// src/catalog/mod.rs

//! The component catalog
//!
//! A [`Catalog`] maps component names to their descriptors. It is built once,
//! either from descriptors in memory or by scanning an add-on directory with
//! [`Catalog::load_dir`], and stays read-only while dependencies are resolved.

mod loader;

pub use loader::{decode_text, manifest_path};

use crate::descriptor::ComponentDescriptor;
use std::collections::BTreeMap;
use tracing::warn;

/// Immutable mapping from component name to descriptor
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    components: BTreeMap<String, ComponentDescriptor>,
}

impl Catalog {
    /// Build a catalog from descriptors
    ///
    /// Names must be unique; when a name repeats, the first descriptor is
    /// kept and the later one is dropped with a warning.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ComponentDescriptor>) -> Self {
        let mut components = BTreeMap::new();
        for descriptor in descriptors {
            if descriptor.name.is_empty() {
                warn!("Skipping component descriptor with an empty name");
                continue;
            }
            if components.contains_key(&descriptor.name) {
                warn!("Duplicate component '{}' ignored", descriptor.name);
                continue;
            }
            components.insert(descriptor.name.clone(), descriptor);
        }
        Self { components }
    }

    /// Look up a component by exact name
    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.get(name)
    }

    /// Whether a component with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Component names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Descriptors in name order
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.values()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
