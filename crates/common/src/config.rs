//! Source configuration loaded from YAML files
//!
//! Every setting is optional; command line flags take precedence over the
//! file and the sources fall back to their built-in vendor paths.
//!
//! ```yaml
//! version: 1
//! limit: 5000
//! companies: data/companies.yaml
//! sources:
//!   piwik:
//!     path: vendor/matomo/device-detector/Tests/fixtures
//!     extensions: [yml]
//! export:
//!   chunk_size: 500
//! ```

use crate::{FixtureError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const SUPPORTED_VERSION: u32 = 1;

/// Root structure of a sources configuration file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Default emission limit, `0` or absent means unlimited
    #[serde(default)]
    pub limit: Option<usize>,
    /// Company list overlaying the built-in one
    #[serde(default)]
    pub companies: Option<PathBuf>,
    /// Per-source overrides, keyed by source name (e.g. "piwik")
    #[serde(default)]
    pub sources: HashMap<String, SourceSettings>,
    #[serde(default)]
    pub export: ExportSettings,
}

/// Overrides for one source
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourceSettings {
    /// Fixture root directory
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// File extensions to read, without the leading dot
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Number of test cases per exported file
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            limit: None,
            companies: None,
            sources: HashMap::new(),
            export: ExportSettings::default(),
        }
    }
}

fn default_version() -> u32 {
    SUPPORTED_VERSION
}

fn default_chunk_size() -> usize {
    1000
}

impl SourcesConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FixtureError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content)
            .map_err(|e| FixtureError::Config(format!("Invalid config in {:?}: {}", path, e)))
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        if config.version != SUPPORTED_VERSION {
            return Err(FixtureError::Config(format!(
                "unsupported config version {} (expected {})",
                config.version, SUPPORTED_VERSION
            )));
        }
        if config.export.chunk_size == 0 {
            return Err(FixtureError::Config(
                "export.chunk_size must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }

    /// Settings for a named source, if any were configured
    pub fn source(&self, name: &str) -> Option<&SourceSettings> {
        self.sources.get(name)
    }

    /// Limit with `0` normalized to "unlimited"
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&limit| limit > 0)
    }
}
