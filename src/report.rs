// src/report.rs

//! Text and JSON rendering of resolution reports
//!
//! The resolver produces plain data; all formatting lives here.

use crate::error::Result;
use crate::resolver::{ComponentReport, ResolutionReport, TransitiveDependencies};
use crate::version::VersionConstraint;
use std::fmt::Write;

/// Note printed under the unused library list
const LIBRARY_DETECTION_NOTE: &str = "[components starting with 'lib' are treated as libraries \
unless they declare IsLibrary, even if they might not be one]";

/// What the text report includes
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    /// Print the per-component dependency matrix
    pub show_matrix: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self { show_matrix: true }
    }
}

/// Render the full text report
pub fn render_text(report: &ResolutionReport, options: TextOptions) -> String {
    let mut out = String::new();
    let components = sorted_components(report);

    if options.show_matrix {
        for (_, component) in &components {
            write_matrix_entry(&mut out, component);
        }
        out.push('\n');
    }

    out.push_str("Unsatisfied mandatory dependencies:\n");
    for (_, component) in components.iter().filter(|(_, c)| !c.missing_mandatory.is_empty()) {
        let _ = writeln!(
            out,
            "* {}: {}",
            component.title,
            join_constraints(&component.missing_mandatory)
        );
    }
    out.push('\n');

    out.push_str("Unsatisfied optional dependencies:\n");
    for (_, component) in components.iter().filter(|(_, c)| !c.missing_optional.is_empty()) {
        let _ = writeln!(
            out,
            "* {}: {}",
            component.title,
            join_constraints(&component.missing_optional)
        );
    }
    out.push('\n');

    out.push_str(&render_unused_libraries(report));

    let failures: Vec<_> = components
        .iter()
        .filter_map(|(name, c)| c.failure.as_deref().map(|f| (name, c, f)))
        .collect();
    if !failures.is_empty() {
        out.push('\n');
        out.push_str("Resolution failures:\n");
        for (name, component, failure) in failures {
            let _ = writeln!(out, "* {} ({}): {}", component.title, name, failure);
        }
    }

    out
}

/// Render only the unused library section
pub fn render_unused_libraries(report: &ResolutionReport) -> String {
    let mut out = String::from("Libraries not used by any other component:\n");
    let mut titles: Vec<&str> = report
        .unused_libraries
        .iter()
        .map(|name| {
            report
                .components
                .get(name)
                .map_or(name.as_str(), |c| c.title.as_str())
        })
        .collect();
    titles.sort_by_key(|t| t.to_lowercase());
    for title in titles {
        let _ = writeln!(out, "* {}", title);
    }
    let _ = writeln!(out, "{}", LIBRARY_DETECTION_NOTE);
    out
}

/// Render the reduced transitive dependencies of one component
pub fn render_transitive(name: &str, deps: &TransitiveDependencies) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Transitive dependencies of '{}':", name);
    if deps.mandatory.is_empty() && deps.optional.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }
    for dep in &deps.mandatory {
        let _ = writeln!(out, "  {} [mandatory]", dep);
    }
    for dep in &deps.optional {
        let _ = writeln!(out, "  {} [optional]", dep);
    }
    out
}

/// Serialize the report as pretty-printed JSON
pub fn render_json(report: &ResolutionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn write_matrix_entry(out: &mut String, component: &ComponentReport) {
    let _ = writeln!(out, "{}", component.title);
    let lines = [
        ("Satisfied mandatory dependencies", &component.satisfied_mandatory),
        ("Satisfied optional dependencies ", &component.satisfied_optional),
        ("Mandatory dependency for        ", &component.used_by_mandatory),
        ("Optional dependency for         ", &component.used_by_optional),
    ];
    for (label, names) in lines {
        if !names.is_empty() {
            let _ = writeln!(out, "    {}: {}", label, names.join(", "));
        }
    }
}

fn join_constraints(constraints: &[VersionConstraint]) -> String {
    constraints
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Components ordered by name, ignoring case
fn sorted_components(report: &ResolutionReport) -> Vec<(&String, &ComponentReport)> {
    let mut components: Vec<_> = report.components.iter().collect();
    components.sort_by_key(|(name, _)| name.to_lowercase());
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::DependencyKind;

    fn sample_report() -> ResolutionReport {
        let mut report = ResolutionReport::default();
        report.components.insert(
            "MapPins".to_string(),
            ComponentReport {
                title: "Map Pins".to_string(),
                satisfied_mandatory: vec!["LibGPS".to_string()],
                missing_mandatory: vec![
                    VersionConstraint::new("LibAddonMenu-2.0", DependencyKind::Mandatory)
                        .with_min("32"),
                ],
                missing_optional: vec![VersionConstraint::new(
                    "LibDebugLogger",
                    DependencyKind::Optional,
                )],
                ..Default::default()
            },
        );
        report.components.insert(
            "LibGPS".to_string(),
            ComponentReport {
                title: "LibGPS".to_string(),
                is_library: true,
                used_by_mandatory: vec!["MapPins".to_string()],
                ..Default::default()
            },
        );
        report.components.insert(
            "libIdle".to_string(),
            ComponentReport {
                title: "Idle Library".to_string(),
                is_library: true,
                failure: Some("Version conflict for 'X'".to_string()),
                ..Default::default()
            },
        );
        report.unused_libraries = vec!["libIdle".to_string()];
        report
    }

    #[test]
    fn test_text_report_sections() {
        let text = render_text(&sample_report(), TextOptions::default());
        assert!(text.contains("Map Pins\n    Satisfied mandatory dependencies: LibGPS\n"));
        assert!(text.contains("    Mandatory dependency for        : MapPins\n"));
        assert!(text.contains("* Map Pins: LibAddonMenu-2.0 >= 32\n"));
        assert!(text.contains("* Map Pins: LibDebugLogger\n"));
        assert!(text.contains("Libraries not used by any other component:\n* Idle Library\n"));
        assert!(text.contains("Resolution failures:\n* Idle Library (libIdle): Version conflict"));
    }

    #[test]
    fn test_text_report_without_matrix() {
        let text = render_text(&sample_report(), TextOptions { show_matrix: false });
        assert!(!text.contains("Satisfied mandatory dependencies"));
        assert!(text.starts_with("Unsatisfied mandatory dependencies:\n"));
    }

    #[test]
    fn test_matrix_sorted_case_insensitively() {
        let text = render_text(&sample_report(), TextOptions::default());
        let gps = text.find("LibGPS\n").unwrap();
        let idle = text.find("Idle Library\n").unwrap();
        let pins = text.find("Map Pins\n").unwrap();
        assert!(gps < idle && idle < pins);
    }

    #[test]
    fn test_render_transitive() {
        let deps = TransitiveDependencies {
            mandatory: vec![VersionConstraint::new("B", DependencyKind::Mandatory).with_max("3")],
            optional: vec![VersionConstraint::new("C", DependencyKind::Optional)],
        };
        let text = render_transitive("A", &deps);
        assert_eq!(
            text,
            "Transitive dependencies of 'A':\n  B <= 3 [mandatory]\n  C [optional]\n"
        );
        let empty = render_transitive("A", &TransitiveDependencies::default());
        assert!(empty.ends_with("(none)\n"));
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["unused_libraries"][0], "libIdle");
        assert_eq!(
            value["components"]["MapPins"]["missing_mandatory"][0]["min_version"],
            "32"
        );
        assert_eq!(
            value["components"]["MapPins"]["missing_mandatory"][0]["kind"],
            "mandatory"
        );
    }
}
