// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `Name/Name.txt` under `root` with the given manifest text.
pub fn write_addon(root: &Path, name: &str, manifest: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.txt", name)), manifest).unwrap();
}

/// Write a manifest as raw bytes, for encoding tests.
pub fn write_addon_bytes(root: &Path, name: &str, manifest: &[u8]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.txt", name)), manifest).unwrap();
}

/// Create an add-on root with a small but complete dependency graph.
///
/// - `Main` needs `LibA >= 1.0` and `LibB`, optionally uses `Extra`
/// - `LibA` needs `LibB <= 3.0`
/// - `LibB` has no dependencies
/// - `LibUnused` is a library nobody uses
/// - `Broken` needs `Missing`, optionally uses `Gone`
///
/// Returns the TempDir; keep it alive to prevent cleanup.
pub fn setup_addon_root() -> TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();

    write_addon(
        root,
        "Main",
        "## Title: |c00ff00Main|r Addon\n\
         ## Author: Someone\n\
         ## Version: 2.1\n\
         ## DependsOn: LibA>=1.0 LibB\n\
         ## OptionalDependsOn: Extra\n",
    );
    write_addon(
        root,
        "LibA",
        "## Title: LibA\n\
         ## IsLibrary: true\n\
         ## DependsOn: LibB<=3.0\n",
    );
    write_addon(root, "LibB", "## Title: LibB\n## IsLibrary: true\n");
    write_addon(root, "LibUnused", "## Title: LibUnused\n");
    write_addon(
        root,
        "Broken",
        "## Title: Broken\n## DependsOn: Missing\n## OptionalDependsOn: Gone\n",
    );

    temp_dir
}
