// src/descriptor/parser.rs

//! Parser for add-on manifest text
//!
//! Manifests are line oriented. Only lines starting with `## ` carry data,
//! in the form `## Key: Value`; every other line is ignored. Field names are
//! matched exactly and case-sensitively.

use super::{ComponentDescriptor, parse_dependency_string, strip_color_codes};
use serde::Serialize;
use std::fmt;
use tracing::{trace, warn};

/// Prefix of a directive line
pub const DATA_DESIGNATOR: &str = "## ";

/// Separator between key and value on a directive line
const KEY_VALUE_SEPARATOR: &str = ": ";

/// A manifest field that was not recognized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    pub component: String,
    pub field: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown data field: {} in {}", self.field, self.component)
    }
}

/// Parse manifest text for the component called `name`
///
/// Unknown fields are logged and collected in `warnings`; parsing never fails.
pub fn parse_descriptor(name: &str, text: &str) -> ComponentDescriptor {
    let mut descriptor = ComponentDescriptor::new(name);

    for line in text.lines() {
        let Some(directive) = line.strip_prefix(DATA_DESIGNATOR) else {
            continue;
        };
        let parts: Vec<&str> = directive.trim_end().split(KEY_VALUE_SEPARATOR).collect();
        if parts.len() != 2 {
            trace!("{}: skipping malformed directive '{}'", name, directive);
            continue;
        }
        set_field(&mut descriptor, parts[0].trim(), parts[1]);
    }

    descriptor
}

fn set_field(descriptor: &mut ComponentDescriptor, field: &str, value: &str) {
    match field {
        "Title" => descriptor.set_title(value),
        "Author" => descriptor.author = strip_color_codes(value),
        "Contributors" => {
            descriptor.contributors = value.split_whitespace().map(strip_color_codes).collect();
        }
        "Description" => descriptor.description = value.to_string(),
        "Version" => descriptor.version = value.to_string(),
        "AddOnVersion" => descriptor.addon_version = value.to_string(),
        "APIVersion" => {
            descriptor.api_versions = value.split_whitespace().map(String::from).collect();
        }
        "Last Updated" => descriptor.last_updated = value.to_string(),
        "IsLibrary" => {
            descriptor.declared_library = Some(value.trim().to_lowercase() == "true");
        }
        "DependsOn" => descriptor.mandatory_dependencies = parse_dependency_string(value),
        "OptionalDependsOn" => descriptor.optional_dependencies = parse_dependency_string(value),
        // Any value at all turns the flag on
        "SavedVariables" => descriptor.saved_variables = true,
        _ => {
            let warning = ParseWarning {
                component: descriptor.name.clone(),
                field: field.to_string(),
            };
            warn!("{}", warning);
            descriptor.warnings.push(warning);
        }
    }
}
