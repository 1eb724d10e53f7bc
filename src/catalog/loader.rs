// src/catalog/loader.rs

//! Loading a catalog from an add-on directory
//!
//! Every immediate sub-directory `Name` of the root that contains a manifest
//! `Name/Name.txt` is one component. The manifest file stem is the component
//! name.

use super::Catalog;
use crate::descriptor::parse_descriptor;
use crate::error::{Error, Result};
use encoding_rs::WINDOWS_1252;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// UTF-8 byte order mark
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Manifest path for the component directory `dir`
pub fn manifest_path(dir: &Path) -> Option<PathBuf> {
    let stem = dir.file_name()?;
    let mut file_name = stem.to_os_string();
    file_name.push(".txt");
    Some(dir.join(file_name))
}

/// Decode manifest bytes into text
///
/// Valid UTF-8 is used as is (without a leading BOM). Anything else is read
/// as Windows-1252, which maps every byte to a character, so decoding never
/// fails.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            debug!("Manifest is not valid UTF-8, decoding as Windows-1252");
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text.into_owned()
        }
    }
}

impl Catalog {
    /// Scan `root` for component manifests and parse them
    pub fn load_dir(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::NotFound(format!(
                "Add-on directory not found: {}",
                root.display()
            )));
        }

        info!("Scanning add-on directory: {}", root.display());
        let mut descriptors = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                Error::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other(format!("Failed to walk {}", root.display()))
                }))
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }

            let Some(manifest) = manifest_path(entry.path()) else {
                continue;
            };
            if !manifest.is_file() {
                debug!("No manifest in {}, skipping", entry.path().display());
                continue;
            }

            let Some(name) = manifest.file_stem().and_then(|s| s.to_str()) else {
                debug!("Manifest name is not valid UTF-8: {}", manifest.display());
                continue;
            };

            let bytes = fs::read(&manifest)?;
            let descriptor = parse_descriptor(name, &decode_text(&bytes));
            debug!(
                "Loaded component '{}' ({} mandatory, {} optional dependencies)",
                descriptor.name,
                descriptor.mandatory_dependencies.len(),
                descriptor.optional_dependencies.len()
            );
            descriptors.push(descriptor);
        }

        let catalog = Catalog::from_descriptors(descriptors);
        info!("Loaded {} components", catalog.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_with_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("## Title: Café".as_bytes());
        assert_eq!(decode_text(&bytes), "## Title: Café");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        let bytes = b"## Title: Caf\xe9";
        assert_eq!(decode_text(bytes), "## Title: Café");
    }

    #[test]
    fn test_decode_windows_1252_punctuation() {
        // 0x92 is a right single quote and 0x80 the euro sign, not C1 controls
        let bytes = b"## Title: Bob\x92s \x80 Addon";
        assert_eq!(decode_text(bytes), "## Title: Bob\u{2019}s \u{20ac} Addon");
    }

    #[test]
    fn test_manifest_path() {
        let path = manifest_path(Path::new("/addons/LibStub")).unwrap();
        assert_eq!(path, PathBuf::from("/addons/LibStub/LibStub.txt"));
    }

    #[test]
    fn test_load_missing_root() {
        let result = Catalog::load_dir(Path::new("/definitely/not/here/addons"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
