// src/config.rs
//! Configuration file parsing
//!
//! Supports an optional TOML file with the following sections:
//! - [scan] - Add-on root directory, dependency depth bound
//! - [report] - Output format, matrix section toggle
//!
//! ```toml
//! [scan]
//! root = "/home/me/Documents/Elder Scrolls Online/live/AddOns"
//! max_depth = 10
//!
//! [report]
//! format = "text"
//! show_matrix = true
//! ```

use crate::error::{Error, Result};
use crate::resolver::DEFAULT_MAX_DEPTH;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "ADDONSCAN_CONFIG";

/// TOML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanConfig {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanSection,

    /// Report settings
    #[serde(default)]
    pub report: ReportSection,
}

/// Scan configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSection {
    /// Add-on root directory
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Maximum depth for transitive gathering
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            root: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Report configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSection {
    #[serde(default)]
    pub format: ReportFormat,

    /// Print the per-component dependency matrix
    #[serde(default = "default_true")]
    pub show_matrix: bool,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            show_matrix: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl ScanConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let config: ScanConfig =
            toml::from_str(content).map_err(|e| Error::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, `$ADDONSCAN_CONFIG`, or the default location
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the default configuration.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load(Path::new(&path));
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.scan.max_depth == 0 {
            return Err(Error::ConfigError("scan.max_depth must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// `<config dir>/addonscan/config.toml`, when a config dir is known
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("addonscan").join("config.toml"))
}
