//! Common types and utilities for ua-fixture-sources
//!
//! This crate contains the canonical test case model, the error type, the
//! collaborator traits used for field mapping and the progress sink shared
//! by the parser, mapper, writer and CLI crates.

mod config;
mod mapping;
mod model;
mod progress;
mod properties;

pub use config::{ExportSettings, SourceSettings, SourcesConfig};
pub use mapping::{CompanyLoader, Mapping, RequestFactory, UaDataMapper};
pub use model::{
    Browser, BrowserType, Company, Device, DeviceType, Engine, Platform, PointingMethod, Request,
    TestCase,
};
pub use progress::{NoProgress, Progress, ProgressSink, RecordingProgress};
pub use properties::BrowscapProperties;

use thiserror::Error;

/// Errors that can occur while reading, mapping or exporting fixtures
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Mapping error: cannot map {field} value {value:?}")]
    Mapping { field: &'static str, value: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FixtureError {
    /// Shorthand for a value a mapper has no entry for
    pub fn unmapped(field: &'static str, value: impl Into<String>) -> Self {
        Self::Mapping {
            field,
            value: value.into(),
        }
    }
}

/// Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_error_message() {
        let err = FixtureError::unmapped("device type", "hologram");
        assert_eq!(
            err.to_string(),
            "Mapping error: cannot map device type value \"hologram\""
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FixtureError = io.into();
        assert!(matches!(err, FixtureError::Io(_)));
    }
}
