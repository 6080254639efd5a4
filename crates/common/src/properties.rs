//! Flat browscap-style property view of a test case

use crate::{Company, TestCase};
use serde::{Deserialize, Serialize};

/// Browscap property names, in browscap order
///
/// Unmapped test cases produce a record where every property is `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowscapProperties {
    #[serde(rename = "Browser_Name")]
    pub browser_name: Option<String>,
    #[serde(rename = "Browser_Type")]
    pub browser_type: Option<String>,
    #[serde(rename = "Browser_Bits")]
    pub browser_bits: Option<u8>,
    #[serde(rename = "Browser_Maker")]
    pub browser_maker: Option<String>,
    #[serde(rename = "Browser_Modus")]
    pub browser_modus: Option<String>,
    #[serde(rename = "Browser_Version")]
    pub browser_version: Option<String>,
    #[serde(rename = "Platform_Codename")]
    pub platform_codename: Option<String>,
    #[serde(rename = "Platform_Marketingname")]
    pub platform_marketingname: Option<String>,
    #[serde(rename = "Platform_Version")]
    pub platform_version: Option<String>,
    #[serde(rename = "Platform_Bits")]
    pub platform_bits: Option<u8>,
    #[serde(rename = "Platform_Maker")]
    pub platform_maker: Option<String>,
    #[serde(rename = "Platform_Brand_Name")]
    pub platform_brand_name: Option<String>,
    #[serde(rename = "Device_Name")]
    pub device_name: Option<String>,
    #[serde(rename = "Device_Maker")]
    pub device_maker: Option<String>,
    #[serde(rename = "Device_Type")]
    pub device_type: Option<String>,
    #[serde(rename = "Device_Pointing_Method")]
    pub device_pointing_method: Option<String>,
    #[serde(rename = "Device_Dual_Orientation")]
    pub device_dual_orientation: Option<bool>,
    #[serde(rename = "Device_Code_Name")]
    pub device_code_name: Option<String>,
    #[serde(rename = "Device_Brand_Name")]
    pub device_brand_name: Option<String>,
    #[serde(rename = "RenderingEngine_Name")]
    pub rendering_engine_name: Option<String>,
    #[serde(rename = "RenderingEngine_Version")]
    pub rendering_engine_version: Option<String>,
    #[serde(rename = "RenderingEngine_Maker")]
    pub rendering_engine_maker: Option<String>,
}

fn company_name(company: &Option<Company>) -> Option<String> {
    company.as_ref().map(|c| c.name.clone())
}

fn brand_name(company: &Option<Company>) -> Option<String> {
    company
        .as_ref()
        .map(|c| c.brand_name.clone().unwrap_or_else(|| c.name.clone()))
}

impl From<&TestCase> for BrowscapProperties {
    fn from(case: &TestCase) -> Self {
        let browser = &case.browser;
        let platform = &case.platform;
        let device = &case.device;
        let engine = &case.engine;

        Self {
            browser_name: browser.name.clone(),
            browser_type: browser.kind.map(|k| k.as_str().to_string()),
            browser_bits: browser.bits,
            browser_maker: company_name(&browser.manufacturer),
            browser_modus: browser.modus.clone(),
            browser_version: browser.version.clone(),
            platform_codename: platform.name.clone(),
            platform_marketingname: platform.marketing_name.clone(),
            platform_version: platform.version.clone(),
            platform_bits: platform.bits,
            platform_maker: company_name(&platform.manufacturer),
            platform_brand_name: brand_name(&platform.brand),
            device_name: device.name.clone(),
            device_maker: company_name(&device.manufacturer),
            device_type: device.kind.map(|k| k.as_str().to_string()),
            device_pointing_method: device.pointing_method.map(|p| p.as_str().to_string()),
            device_dual_orientation: device.dual_orientation,
            device_code_name: device.code_name.clone(),
            device_brand_name: brand_name(&device.brand),
            rendering_engine_name: engine.name.clone(),
            rendering_engine_version: engine.version.clone(),
            rendering_engine_maker: company_name(&engine.manufacturer),
        }
    }
}
