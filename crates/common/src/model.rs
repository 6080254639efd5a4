//! Canonical test case model
//!
//! Every attribute starts out as `None` / unknown. Sources without a
//! [`Mapping`](crate::Mapping) emit test cases in that state; mapped sources
//! fill in whatever the collaborators can resolve.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A normalized fixture: one user agent plus its expected classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub request: Request,
    #[serde(default)]
    pub browser: Browser,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub device: Device,
    #[serde(default)]
    pub engine: Engine,
}

impl TestCase {
    /// Create an unclassified test case for a request
    pub fn new(request: Request) -> Self {
        Self {
            request,
            browser: Browser::default(),
            platform: Platform::default(),
            device: Device::default(),
            engine: Engine::default(),
        }
    }

    /// The user agent this test case was built for
    pub fn user_agent(&self) -> &str {
        &self.request.user_agent
    }
}

/// The request a fixture describes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub user_agent: String,
    /// Header names are lower case
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Request {
    /// Build a request carrying only a `user-agent` header
    pub fn from_user_agent(user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        let mut headers = BTreeMap::new();
        headers.insert("user-agent".to_string(), user_agent.clone());
        Self {
            user_agent,
            headers,
        }
    }
}

/// A vendor or brand owner, e.g. "Google Inc." with brand "Google"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub brand_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Browser {
    pub name: Option<String>,
    pub version: Option<String>,
    pub manufacturer: Option<Company>,
    #[serde(rename = "type")]
    pub kind: Option<BrowserType>,
    pub bits: Option<u8>,
    pub modus: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: Option<String>,
    pub marketing_name: Option<String>,
    pub version: Option<String>,
    pub manufacturer: Option<Company>,
    pub brand: Option<Company>,
    pub bits: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: Option<String>,
    pub marketing_name: Option<String>,
    pub manufacturer: Option<Company>,
    pub brand: Option<Company>,
    #[serde(rename = "type")]
    pub kind: Option<DeviceType>,
    pub pointing_method: Option<PointingMethod>,
    pub dual_orientation: Option<bool>,
    pub code_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub name: Option<String>,
    pub version: Option<String>,
    pub manufacturer: Option<Company>,
}

/// Client categories known to device-detector style fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowserType {
    Browser,
    MobileApp,
    FeedReader,
    Library,
    MediaPlayer,
    Pim,
    Bot,
    Unknown,
}

impl BrowserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserType::Browser => "Browser",
            BrowserType::MobileApp => "Application",
            BrowserType::FeedReader => "Feed Reader",
            BrowserType::Library => "Library",
            BrowserType::MediaPlayer => "Multimedia Player",
            BrowserType::Pim => "Email Client",
            BrowserType::Bot => "Bot/Crawler",
            BrowserType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BrowserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    Desktop,
    Smartphone,
    Tablet,
    Phablet,
    FeaturePhone,
    Console,
    Tv,
    CarBrowser,
    SmartDisplay,
    Camera,
    PortableMediaPlayer,
    SmartSpeaker,
    Wearable,
    Peripheral,
    Unknown,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "Desktop",
            DeviceType::Smartphone => "Mobile Phone",
            DeviceType::Tablet => "Tablet",
            DeviceType::Phablet => "Phablet",
            DeviceType::FeaturePhone => "Feature Phone",
            DeviceType::Console => "Console",
            DeviceType::Tv => "TV Device",
            DeviceType::CarBrowser => "Car Entertainment System",
            DeviceType::SmartDisplay => "Smart Display",
            DeviceType::Camera => "Digital Camera",
            DeviceType::PortableMediaPlayer => "Portable Media Player",
            DeviceType::SmartSpeaker => "Smart Speaker",
            DeviceType::Wearable => "Wearable",
            DeviceType::Peripheral => "Peripheral",
            DeviceType::Unknown => "unknown",
        }
    }

    /// Primary input method for devices of this type, if it is fixed
    pub fn pointing_method(&self) -> Option<PointingMethod> {
        match self {
            DeviceType::Smartphone
            | DeviceType::Tablet
            | DeviceType::Phablet
            | DeviceType::SmartDisplay
            | DeviceType::Wearable => Some(PointingMethod::Touchscreen),
            DeviceType::Desktop => Some(PointingMethod::Mouse),
            DeviceType::FeaturePhone => Some(PointingMethod::Joystick),
            _ => None,
        }
    }

    /// Whether devices of this type rotate between portrait and landscape
    pub fn dual_orientation(&self) -> Option<bool> {
        match self {
            DeviceType::Smartphone | DeviceType::Tablet | DeviceType::Phablet => Some(true),
            DeviceType::Unknown => None,
            _ => Some(false),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointingMethod {
    Mouse,
    Touchscreen,
    Joystick,
}

impl PointingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointingMethod::Mouse => "mouse",
            PointingMethod::Touchscreen => "touchscreen",
            PointingMethod::Joystick => "joystick",
        }
    }
}
