//! Default collaborators for mapped fixture sources
//!
//! - [`DefaultDataMapper`] translates vendor vocabulary (browser, OS, device
//!   and engine names) into canonical names and company keys
//! - [`CompanyRegistry`] resolves company keys, names and brand names
//!   against a built-in list, optionally overlaid from a YAML file
//! - [`GenericRequestFactory`] builds requests from fixture headers

mod company;
mod data_mapper;
mod request;

pub use company::CompanyRegistry;
pub use data_mapper::DefaultDataMapper;
pub use request::GenericRequestFactory;

use std::path::Path;
use ua_fixture_sources_common::{Mapping, Result};

/// Bundle the default collaborators
///
/// `companies` is an optional YAML company list merged over the built-in one.
pub fn default_mapping(companies: Option<&Path>) -> Result<Mapping> {
    let mut registry = CompanyRegistry::builtin()?;
    if let Some(path) = companies {
        registry = registry.with_overlay(path)?;
    }

    Ok(Mapping::new(
        DefaultDataMapper::new(),
        registry,
        GenericRequestFactory::new(),
    ))
}
