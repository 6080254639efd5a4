//! Collaborator traits for the field mapping pass
//!
//! Sources only talk to these traits. Default implementations live in the
//! mapper crate; tests substitute mocks. Every method may fail, and callers
//! degrade a failed lookup to an unknown value instead of aborting.

use crate::{BrowserType, Company, DeviceType, Request, Result};
use std::collections::BTreeMap;

/// Translates vendor specific field values into canonical names
///
/// Name-like lookups return `Ok(None)` for values that mean "unknown"
/// (empty strings, `UNK`, ...). Type lookups fail for values they do not
/// recognise.
pub trait UaDataMapper {
    fn map_browser_name(&self, name: &str) -> Result<Option<String>>;

    fn map_browser_type(&self, kind: &str) -> Result<BrowserType>;

    fn map_browser_version(&self, version: &str) -> Result<Option<String>>;

    /// Company key of the vendor of a (canonical) browser name
    fn map_browser_maker(&self, browser_name: &str) -> Result<Option<String>>;

    fn map_os_name(&self, name: &str) -> Result<Option<String>>;

    /// Marketing name for a canonical platform name; `version` may be empty
    fn map_os_marketing_name(&self, name: &str, version: &str) -> Result<Option<String>>;

    fn map_os_version(&self, version: &str) -> Result<Option<String>>;

    /// Company key of the vendor of a (canonical) platform name
    fn map_os_maker(&self, os_name: &str) -> Result<Option<String>>;

    fn map_device_type(&self, kind: &str) -> Result<DeviceType>;

    /// Full brand name for a brand value, which may be a short code
    fn map_device_brand_name(&self, brand: &str) -> Result<Option<String>>;

    fn map_device_name(&self, model: &str) -> Result<Option<String>>;

    fn map_engine_name(&self, name: &str) -> Result<Option<String>>;

    /// Company key of the vendor of a (canonical) engine name
    fn map_engine_maker(&self, engine_name: &str) -> Result<Option<String>>;
}

/// Looks up companies by key, name or brand
pub trait CompanyLoader {
    fn load(&self, key: &str) -> Result<Company>;

    fn search_by_name(&self, name: &str) -> Result<Company>;

    fn search_by_brand_name(&self, brand_name: &str) -> Result<Company>;
}

/// Builds the request a fixture describes from its headers
pub trait RequestFactory {
    fn create(&self, headers: &BTreeMap<String, String>) -> Result<Request>;
}

/// The collaborators a mapped source needs
pub struct Mapping {
    pub data: Box<dyn UaDataMapper>,
    pub companies: Box<dyn CompanyLoader>,
    pub requests: Box<dyn RequestFactory>,
}

impl Mapping {
    pub fn new(
        data: impl UaDataMapper + 'static,
        companies: impl CompanyLoader + 'static,
        requests: impl RequestFactory + 'static,
    ) -> Self {
        Self {
            data: Box::new(data),
            companies: Box::new(companies),
            requests: Box::new(requests),
        }
    }
}

impl std::fmt::Debug for Mapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapping").finish_non_exhaustive()
    }
}
