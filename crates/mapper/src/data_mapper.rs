//! Value mapping from device-detector vocabulary to canonical names
//!
//! Maps the names, types and brand codes found in device-detector fixtures
//! onto the names the comparison harness uses.

use ua_fixture_sources_common::{BrowserType, DeviceType, FixtureError, Result, UaDataMapper};

/// Table driven [`UaDataMapper`] for device-detector fixtures
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDataMapper;

impl DefaultDataMapper {
    pub fn new() -> Self {
        Self
    }

    /// Whether a raw value means "nothing detected"
    ///
    /// # Examples
    /// ```
    /// use ua_fixture_sources_mapper::DefaultDataMapper;
    ///
    /// assert!(DefaultDataMapper::is_unknown(""));
    /// assert!(DefaultDataMapper::is_unknown("UNK"));
    /// assert!(!DefaultDataMapper::is_unknown("Chrome"));
    /// ```
    pub fn is_unknown(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed == "-"
            || trimmed.eq_ignore_ascii_case("unk")
            || trimmed.eq_ignore_ascii_case("unknown")
            || trimmed.eq_ignore_ascii_case("null")
    }

    fn known(value: &str) -> Option<&str> {
        if Self::is_unknown(value) {
            None
        } else {
            Some(value.trim())
        }
    }

    /// Normalize a dotted version; `0` and `0.0` mean unknown
    ///
    /// # Examples
    /// ```
    /// use ua_fixture_sources_mapper::DefaultDataMapper;
    ///
    /// assert_eq!(DefaultDataMapper::normalize_version("4_1_1"), Some("4.1.1".to_string()));
    /// assert_eq!(DefaultDataMapper::normalize_version("0.0"), None);
    /// ```
    pub fn normalize_version(version: &str) -> Option<String> {
        let version = Self::known(version)?.replace('_', ".");
        if version.split('.').all(|part| part.chars().all(|c| c == '0')) {
            return None;
        }
        Some(version)
    }
}

impl UaDataMapper for DefaultDataMapper {
    fn map_browser_name(&self, name: &str) -> Result<Option<String>> {
        let Some(name) = Self::known(name) else {
            return Ok(None);
        };

        let mapped = match name {
            "Chrome Mobile" | "Chrome Mobile iOS" => "Chrome",
            "Chrome Webview" => "Android WebView",
            "Mobile Safari" => "Safari",
            "Firefox Mobile" | "Firefox Mobile iOS" => "Firefox",
            "Microsoft Edge" | "Edge Mobile" => "Edge",
            "IE Mobile" => "IEMobile",
            "Opera Mobile" => "Opera Mobile",
            "Opera Mini iOS" => "Opera Mini",
            "Samsung Browser" => "Samsung Browser",
            "UC Browser Mini" => "UC Browser",
            "Yandex Browser Lite" => "Yandex Browser",
            "Facebook External Hit" => "FacebookExternalHit",
            other => other,
        };

        Ok(Some(mapped.to_string()))
    }

    fn map_browser_type(&self, kind: &str) -> Result<BrowserType> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "browser" => Ok(BrowserType::Browser),
            "mobile app" => Ok(BrowserType::MobileApp),
            "feed reader" => Ok(BrowserType::FeedReader),
            "library" => Ok(BrowserType::Library),
            "mediaplayer" | "media player" => Ok(BrowserType::MediaPlayer),
            "pim" => Ok(BrowserType::Pim),
            "bot" => Ok(BrowserType::Bot),
            _ => Err(FixtureError::unmapped("browser type", kind)),
        }
    }

    fn map_browser_version(&self, version: &str) -> Result<Option<String>> {
        Ok(Self::normalize_version(version))
    }

    fn map_browser_maker(&self, browser_name: &str) -> Result<Option<String>> {
        let key = match browser_name {
            "Chrome" | "Chromium" | "Android Browser" | "Android WebView" => "google",
            "Safari" => "apple",
            "Firefox" | "Thunderbird" | "SeaMonkey" => "mozilla",
            "Edge" | "Internet Explorer" | "IEMobile" | "Outlook" => "microsoft",
            "Opera" | "Opera Mobile" | "Opera Mini" => "opera",
            "Samsung Browser" => "samsung",
            "UC Browser" => "ucweb",
            "Yandex Browser" => "yandex",
            "MIUI Browser" => "xiaomi",
            "Huawei Browser" => "huawei",
            "Vivaldi" => "vivaldi",
            "Brave" => "brave",
            "FacebookExternalHit" | "Facebook" => "facebook",
            _ => return Ok(None),
        };

        Ok(Some(key.to_string()))
    }

    fn map_os_name(&self, name: &str) -> Result<Option<String>> {
        let Some(name) = Self::known(name) else {
            return Ok(None);
        };

        let mapped = match name {
            "Mac" => "macOS",
            "GNU/Linux" => "Linux",
            "Chrome OS" => "ChromeOS",
            "BlackBerry OS" => "RIM OS",
            "BlackBerry Tablet OS" => "RIM Tablet OS",
            "Windows RT" => "Windows RT",
            other => other,
        };

        Ok(Some(mapped.to_string()))
    }

    fn map_os_marketing_name(&self, name: &str, version: &str) -> Result<Option<String>> {
        let Some(name) = Self::known(name) else {
            return Ok(None);
        };
        let version = version.trim();

        let marketing = match (name, version) {
            ("Windows", "XP" | "Vista" | "7" | "8" | "8.1" | "10" | "11") => {
                format!("Windows {}", version)
            }
            ("Windows", "5.1") => "Windows XP".to_string(),
            ("Windows", "6.0") => "Windows Vista".to_string(),
            ("Windows", "6.1") => "Windows 7".to_string(),
            ("Windows", "6.2") => "Windows 8".to_string(),
            ("Windows", "6.3") => "Windows 8.1".to_string(),
            ("macOS", v) if v.starts_with("10.") => {
                // 10.0 - 10.7 were released as "Mac OS X"
                let minor = v
                    .split('.')
                    .nth(1)
                    .and_then(|m| m.parse::<u32>().ok())
                    .unwrap_or(0);
                if minor <= 7 {
                    "Mac OS X".to_string()
                } else if minor <= 11 {
                    "OS X".to_string()
                } else {
                    "macOS".to_string()
                }
            }
            (other, _) => other.to_string(),
        };

        Ok(Some(marketing))
    }

    fn map_os_version(&self, version: &str) -> Result<Option<String>> {
        Ok(Self::normalize_version(version))
    }

    fn map_os_maker(&self, os_name: &str) -> Result<Option<String>> {
        let key = match os_name {
            name if name.starts_with("Windows") => "microsoft",
            "macOS" | "iOS" | "iPadOS" | "tvOS" | "watchOS" => "apple",
            "Android" | "ChromeOS" | "Fuchsia" => "google",
            "Linux" => "linux-foundation",
            "Ubuntu" => "canonical",
            "Debian" => "debian",
            "Fedora" => "redhat",
            "RIM OS" | "RIM Tablet OS" => "blackberry",
            "Tizen" | "Bada" => "samsung",
            "KaiOS" => "kaios",
            "HarmonyOS" => "huawei",
            _ => return Ok(None),
        };

        Ok(Some(key.to_string()))
    }

    fn map_device_type(&self, kind: &str) -> Result<DeviceType> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(DeviceType::Desktop),
            "smartphone" => Ok(DeviceType::Smartphone),
            "tablet" => Ok(DeviceType::Tablet),
            "phablet" => Ok(DeviceType::Phablet),
            "feature phone" => Ok(DeviceType::FeaturePhone),
            "console" => Ok(DeviceType::Console),
            "tv" => Ok(DeviceType::Tv),
            "car browser" => Ok(DeviceType::CarBrowser),
            "smart display" => Ok(DeviceType::SmartDisplay),
            "camera" => Ok(DeviceType::Camera),
            "portable media player" => Ok(DeviceType::PortableMediaPlayer),
            "smart speaker" => Ok(DeviceType::SmartSpeaker),
            "wearable" => Ok(DeviceType::Wearable),
            "peripheral" => Ok(DeviceType::Peripheral),
            _ => Err(FixtureError::unmapped("device type", kind)),
        }
    }

    fn map_device_brand_name(&self, brand: &str) -> Result<Option<String>> {
        let Some(brand) = Self::known(brand) else {
            return Ok(None);
        };

        // Old fixtures carry two letter brand codes instead of names
        let mapped = match brand {
            "AC" => "Acer",
            "AP" => "Apple",
            "AS" => "Asus",
            "BB" => "BlackBerry",
            "GO" => "Google",
            "HT" => "HTC",
            "HU" => "Huawei",
            "LE" => "Lenovo",
            "LG" => "LG",
            "MO" => "Motorola",
            "MS" => "Microsoft",
            "NK" => "Nokia",
            "OP" => "OPPO",
            "SA" => "Samsung",
            "SE" => "Sony Ericsson",
            "SO" => "Sony",
            "XI" => "Xiaomi",
            "ZT" => "ZTE",
            other => other,
        };

        Ok(Some(mapped.to_string()))
    }

    fn map_device_name(&self, model: &str) -> Result<Option<String>> {
        Ok(Self::known(model).map(str::to_string))
    }

    fn map_engine_name(&self, name: &str) -> Result<Option<String>> {
        Ok(Self::known(name).map(str::to_string))
    }

    fn map_engine_maker(&self, engine_name: &str) -> Result<Option<String>> {
        let key = match engine_name {
            "Blink" => "google",
            "WebKit" => "apple",
            "Gecko" | "Goanna" => "mozilla",
            "Trident" | "EdgeHTML" => "microsoft",
            "Presto" => "opera",
            "U2" | "U3" => "ucweb",
            _ => return Ok(None),
        };

        Ok(Some(key.to_string()))
    }
}
