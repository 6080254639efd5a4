//! Piwik fixture row sections
//!
//! Every field is optional and accepts any scalar, because older fixture
//! revisions leave versions unquoted and newer ones drop empty sections.

use crate::row::{lenient_string, FixtureRow};
use serde::{Deserialize, Deserializer};

/// Typed view of one device-detector fixture row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PiwikRow {
    pub client: Option<PiwikClient>,
    pub os: Option<PiwikOs>,
    pub device: Option<PiwikDevice>,
    pub bot: Option<PiwikBot>,
}

impl PiwikRow {
    pub fn from_row(row: &FixtureRow) -> Self {
        Self {
            client: row.section("client"),
            os: row.section("os"),
            device: row.section("device"),
            bot: row.section("bot"),
        }
    }
}

/// Detected client (browser, app, library, ...)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PiwikClient {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub short_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,

    /// Rendering engine name (browsers only)
    #[serde(default, deserialize_with = "lenient_string")]
    pub engine: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub engine_version: Option<String>,
}

/// Detected operating system
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PiwikOs {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub short_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,

    /// CPU architecture: `x64`, `x86`, `ARM` or empty
    #[serde(default, deserialize_with = "lenient_string")]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PiwikDevice {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,

    /// Brand name, or a two letter brand code in old fixtures
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub model: Option<String>,
}

/// Detected crawler
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PiwikBot {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient_producer")]
    pub producer: Option<PiwikProducer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PiwikProducer {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
}

fn lenient_producer<'de, D>(deserializer: D) -> Result<Option<PiwikProducer>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| v.is_mapping())
        .and_then(|v| serde_yaml::from_value(v).ok()))
}

/// Trimmed, non-empty text of an optional field
pub(crate) fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_rows;

    fn first_row(yaml: &str) -> PiwikRow {
        let rows = parse_rows(serde_yaml::from_str(yaml).unwrap()).unwrap();
        PiwikRow::from_row(&rows[0])
    }

    #[test]
    fn test_full_row() {
        let row = first_row(
            r#"
- user_agent: ua
  os:
    name: Android
    short_name: AND
    version: 4.1
    platform: ARM
  client:
    type: browser
    name: Chrome Mobile
    version: "18.0.1025.166"
    engine: WebKit
    engine_version: ""
  device:
    type: smartphone
    brand: SA
    model: GT-I9300
"#,
        );

        let os = row.os.unwrap();
        assert_eq!(os.version.as_deref(), Some("4.1"));
        assert_eq!(os.platform.as_deref(), Some("ARM"));

        let client = row.client.unwrap();
        assert_eq!(client.kind.as_deref(), Some("browser"));
        assert_eq!(text(&client.engine_version), None);

        let device = row.device.unwrap();
        assert_eq!(device.brand.as_deref(), Some("SA"));
        assert!(row.bot.is_none());
    }

    #[test]
    fn test_bot_row_and_empty_sections() {
        let row = first_row(
            r#"
- user_agent: Googlebot/2.1
  os: []
  client: ~
  bot:
    name: Googlebot
    category: Search bot
    producer:
      name: Google Inc.
      url: http://www.google.com
"#,
        );

        assert!(row.os.is_none());
        assert!(row.client.is_none());
        let bot = row.bot.unwrap();
        assert_eq!(bot.name.as_deref(), Some("Googlebot"));
        assert_eq!(
            bot.producer.and_then(|p| p.name).as_deref(),
            Some("Google Inc.")
        );
    }

    #[test]
    fn test_text_helper() {
        assert_eq!(text(&Some("  x ".to_string())), Some("x"));
        assert_eq!(text(&Some("   ".to_string())), None);
        assert_eq!(text(&None), None);
    }
}
