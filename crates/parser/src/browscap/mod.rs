//! Browscap issue fixture source
//!
//! Reads the YAML issue fixtures shipped with browscap. Only the user agents
//! are taken; every classification property is left null.

mod parser;

pub use parser::{BrowscapIssuesSource, DEFAULT_BROWSCAP_ISSUES_PATH};
