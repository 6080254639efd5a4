//! Raw fixture rows

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// One fixture record as loaded from disk
///
/// Fields differ between vendors and between revisions of a vendor's
/// fixtures, so the row keeps the raw mapping and offers typed views.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureRow {
    values: Mapping,
}

impl FixtureRow {
    pub fn new(values: Mapping) -> Self {
        Self { values }
    }

    /// The `user_agent` field as text, untrimmed
    pub fn user_agent(&self) -> Option<String> {
        self.values.get("user_agent").and_then(scalar_to_string)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Deserialize a sub-mapping such as `client` or `os`
    ///
    /// Anything other than a mapping (vendors use `[]` or `null` for
    /// "nothing detected") yields `None`, as does a mapping of the wrong
    /// shape.
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        if !value.is_mapping() {
            return None;
        }

        match serde_yaml::from_value(value.clone()) {
            Ok(section) => Some(section),
            Err(e) => {
                tracing::debug!(section = key, error = %e, "ignoring malformed fixture section");
                None
            }
        }
    }

    /// Request headers stored with the row, names lower-cased
    pub fn headers(&self) -> BTreeMap<String, String> {
        let Some(Value::Mapping(headers)) = self.values.get("headers") else {
            return BTreeMap::new();
        };

        headers
            .iter()
            .filter_map(|(name, value)| {
                let name = scalar_to_string(name)?;
                let value = scalar_to_string(value)?;
                Some((name.to_ascii_lowercase(), value))
            })
            .collect()
    }
}

/// Render a YAML scalar as text; fixtures mix quoted and unquoted versions
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

/// `deserialize_with` helper accepting any scalar as an optional string
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(yaml: &str) -> FixtureRow {
        match serde_yaml::from_str(yaml).unwrap() {
            Value::Mapping(m) => FixtureRow::new(m),
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_user_agent_scalars() {
        assert_eq!(
            row("user_agent: ' Mozilla/5.0 '").user_agent().as_deref(),
            Some(" Mozilla/5.0 ")
        );
        assert_eq!(row("user_agent: 42").user_agent().as_deref(), Some("42"));
        assert_eq!(row("user_agent: ~").user_agent(), None);
        assert_eq!(row("other: x").user_agent(), None);
    }

    #[test]
    fn test_section_requires_mapping() {
        #[derive(Deserialize)]
        struct Os {
            #[serde(default, deserialize_with = "lenient_string")]
            version: Option<String>,
        }

        let with_os = row("os:\n  version: 10");
        let os: Os = with_os.section("os").unwrap();
        assert_eq!(os.version.as_deref(), Some("10"));

        assert!(row("os: []").section::<Os>("os").is_none());
        assert!(row("os: ~").section::<Os>("os").is_none());
        assert!(row("user_agent: x").section::<Os>("os").is_none());
    }

    #[test]
    fn test_headers_are_lower_cased() {
        let r = row("headers:\n  Sec-CH-UA-Mobile: '?1'\n  X-Requested-With: com.example");
        let headers = r.headers();
        assert_eq!(headers.get("sec-ch-ua-mobile").map(String::as_str), Some("?1"));
        assert_eq!(
            headers.get("x-requested-with").map(String::as_str),
            Some("com.example")
        );
        assert!(row("user_agent: x").headers().is_empty());
    }
}
