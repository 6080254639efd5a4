//! Converts piwik fixture rows into canonical test cases

use super::types::{text, PiwikBot, PiwikClient, PiwikDevice, PiwikOs, PiwikRow};
use crate::row::FixtureRow;
use crate::stream::RowConverter;
use ua_fixture_sources_common::{
    Browser, BrowserType, Company, Device, DeviceType, Engine, Mapping, Platform, Request, Result,
    TestCase,
};

/// Row converter for device-detector fixtures
///
/// Without a [`Mapping`] the test case only carries the request. With one,
/// every section is translated through the collaborators. A failing lookup
/// is logged and leaves its field unknown.
#[derive(Debug, Default)]
pub struct PiwikConverter {
    mapping: Option<Mapping>,
}

impl PiwikConverter {
    pub fn new(mapping: Option<Mapping>) -> Self {
        Self { mapping }
    }

    pub fn is_mapped(&self) -> bool {
        self.mapping.is_some()
    }
}

impl RowConverter for PiwikConverter {
    fn convert(&self, user_agent: &str, row: &FixtureRow) -> TestCase {
        let Some(mapping) = &self.mapping else {
            return TestCase::new(Request::from_user_agent(user_agent));
        };

        let lookups = Lookups {
            mapping,
            user_agent,
        };
        let fixture = PiwikRow::from_row(row);

        let mut headers = row.headers();
        headers.insert("user-agent".to_string(), user_agent.to_string());
        let request = lookups
            .degrade("request", mapping.requests.create(&headers))
            .unwrap_or_else(|| Request::from_user_agent(user_agent));

        let mut case = TestCase::new(request);

        if let Some(bot) = &fixture.bot {
            lookups.map_bot(bot, &mut case.browser);
        } else if let Some(client) = &fixture.client {
            lookups.map_client(client, &mut case.browser, &mut case.engine);
        }

        if let Some(os) = &fixture.os {
            lookups.map_os(os, &mut case.platform);
        }

        if let Some(device) = &fixture.device {
            lookups.map_device(device, &mut case.device);
        }

        case
    }
}

struct Lookups<'a> {
    mapping: &'a Mapping,
    user_agent: &'a str,
}

impl Lookups<'_> {
    /// Unwrap a lookup, logging failures as critical and dropping the value
    fn degrade<T>(&self, field: &'static str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(
                    user_agent = self.user_agent,
                    field,
                    error = %e,
                    "lookup failed, leaving field unknown"
                );
                None
            }
        }
    }

    fn company(&self, field: &'static str, key: Option<String>) -> Option<Company> {
        let key = key?;
        self.degrade(field, self.mapping.companies.load(&key))
    }

    fn map_client(&self, client: &PiwikClient, browser: &mut Browser, engine: &mut Engine) {
        let data = &self.mapping.data;

        if let Some(kind) = text(&client.kind) {
            browser.kind = Some(
                self.degrade("browser type", data.map_browser_type(kind))
                    .unwrap_or(BrowserType::Unknown),
            );
        }

        browser.name = text(&client.name)
            .and_then(|name| self.degrade("browser name", data.map_browser_name(name)))
            .flatten();

        browser.version = text(&client.version)
            .and_then(|version| self.degrade("browser version", data.map_browser_version(version)))
            .flatten();

        let maker = browser
            .name
            .as_deref()
            .and_then(|name| self.degrade("browser maker", data.map_browser_maker(name)))
            .flatten();
        browser.manufacturer = self.company("browser maker", maker);

        engine.name = text(&client.engine)
            .and_then(|name| self.degrade("engine name", data.map_engine_name(name)))
            .flatten();

        engine.version = text(&client.engine_version)
            .and_then(|version| self.degrade("engine version", data.map_browser_version(version)))
            .flatten();

        let maker = engine
            .name
            .as_deref()
            .and_then(|name| self.degrade("engine maker", data.map_engine_maker(name)))
            .flatten();
        engine.manufacturer = self.company("engine maker", maker);
    }

    fn map_bot(&self, bot: &PiwikBot, browser: &mut Browser) {
        browser.kind = Some(BrowserType::Bot);
        browser.name = text(&bot.name).map(str::to_string);

        let producer = bot.producer.as_ref().and_then(|p| text(&p.name));
        browser.manufacturer = producer.and_then(|name| {
            self.degrade("bot producer", self.mapping.companies.search_by_name(name))
        });
    }

    fn map_os(&self, os: &PiwikOs, platform: &mut Platform) {
        let data = &self.mapping.data;

        platform.name = text(&os.name)
            .and_then(|name| self.degrade("platform name", data.map_os_name(name)))
            .flatten();

        platform.version = text(&os.version)
            .and_then(|version| self.degrade("platform version", data.map_os_version(version)))
            .flatten();

        if let Some(name) = platform.name.as_deref() {
            let version = platform.version.as_deref().unwrap_or("");
            platform.marketing_name = self
                .degrade(
                    "platform marketing name",
                    data.map_os_marketing_name(name, version),
                )
                .flatten();

            let maker = self
                .degrade("platform maker", data.map_os_maker(name))
                .flatten();
            platform.manufacturer = self.company("platform maker", maker);
            platform.brand = platform.manufacturer.clone();
        }

        platform.bits = text(&os.platform).and_then(architecture_bits);
    }

    fn map_device(&self, device: &PiwikDevice, target: &mut Device) {
        let data = &self.mapping.data;

        if let Some(kind) = text(&device.kind) {
            let kind = self
                .degrade("device type", data.map_device_type(kind))
                .unwrap_or(DeviceType::Unknown);
            target.kind = Some(kind);
            target.pointing_method = kind.pointing_method();
            target.dual_orientation = kind.dual_orientation();
        }

        let brand_name = text(&device.brand)
            .and_then(|brand| self.degrade("device brand", data.map_device_brand_name(brand)))
            .flatten();
        target.brand = brand_name.and_then(|brand| {
            self.degrade(
                "device brand",
                self.mapping.companies.search_by_brand_name(&brand),
            )
        });
        target.manufacturer = target.brand.clone();

        if let Some(model) = text(&device.model) {
            target.code_name = Some(model.to_string());
            target.name = self
                .degrade("device name", data.map_device_name(model))
                .flatten();
            target.marketing_name = target.name.clone();
        }
    }
}

/// Bitness of a device-detector CPU architecture value
fn architecture_bits(platform: &str) -> Option<u8> {
    match platform.to_ascii_lowercase().as_str() {
        "x64" | "x86_64" | "arm64" | "aarch64" => Some(64),
        "x86" | "i686" => Some(32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_bits() {
        assert_eq!(architecture_bits("x64"), Some(64));
        assert_eq!(architecture_bits("X86"), Some(32));
        assert_eq!(architecture_bits("ARM"), None);
        assert_eq!(architecture_bits(""), None);
    }

    #[test]
    fn test_unmapped_converter_emits_request_only() {
        let rows = crate::loader::parse_rows(
            serde_yaml::from_str("- user_agent: ua\n  client:\n    name: Chrome").unwrap(),
        )
        .unwrap();

        let converter = PiwikConverter::default();
        assert!(!converter.is_mapped());

        let case = converter.convert("ua", &rows[0]);
        assert_eq!(case, TestCase::new(Request::from_user_agent("ua")));
    }
}
