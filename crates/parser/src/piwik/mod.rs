//! Piwik / Matomo device-detector fixture source
//!
//! The device-detector project ships its expectations as YAML lists under
//! `Tests/fixtures`. Each row carries the `user_agent` plus optional
//! `client`, `os`, `device` and `bot` sections.
//!
//! ## Format
//! ```yaml
//! -
//!   user_agent: Mozilla/5.0 (Linux; Android 4.1.1; GT-I9300 Build/JRO03C) ...
//!   os:
//!     name: Android
//!     version: "4.1.1"
//!     platform: ""
//!   client:
//!     type: browser
//!     name: Chrome Mobile
//!     version: "18.0.1025.166"
//!     engine: WebKit
//!     engine_version: "535.19"
//!   device:
//!     type: smartphone
//!     brand: Samsung
//!     model: GALAXY S III
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use ua_fixture_sources_parser::{PiwikSource, Source};
//! use ua_fixture_sources_common::NoProgress;
//!
//! let source = PiwikSource::new();
//! for agent in source.user_agents(&NoProgress, Some(100)) {
//!     println!("{agent}");
//! }
//! ```

mod converter;
mod parser;
mod types;

pub use converter::PiwikConverter;
pub use parser::{PiwikSource, DEFAULT_PIWIK_PATH};
pub use types::*;
