use std::collections::BTreeMap;
use ua_fixture_sources_common::{FixtureError, Request, RequestFactory, Result};

/// Builds requests from raw header maps
///
/// Header names are lower-cased and values trimmed. Empty headers are
/// dropped; a request without a `user-agent` header is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericRequestFactory;

impl GenericRequestFactory {
    pub fn new() -> Self {
        Self
    }
}

impl RequestFactory for GenericRequestFactory {
    fn create(&self, headers: &BTreeMap<String, String>) -> Result<Request> {
        let headers: BTreeMap<String, String> = headers
            .iter()
            .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
            .filter(|(name, value)| !name.is_empty() && !value.is_empty())
            .collect();

        let user_agent = headers
            .get("user-agent")
            .cloned()
            .ok_or_else(|| FixtureError::Parse("request has no user-agent header".to_string()))?;

        Ok(Request {
            user_agent,
            headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_create_normalizes_headers() {
        let request = GenericRequestFactory::new()
            .create(&headers(&[
                ("User-Agent", " Mozilla/5.0 "),
                ("Sec-CH-UA-Platform", "\"Android\""),
                ("X-Empty", ""),
            ]))
            .unwrap();

        assert_eq!(request.user_agent, "Mozilla/5.0");
        assert_eq!(request.headers.len(), 2);
        assert_eq!(
            request.headers.get("sec-ch-ua-platform").map(String::as_str),
            Some("\"Android\"")
        );
        assert!(!request.headers.contains_key("x-empty"));
    }

    #[test]
    fn test_create_requires_user_agent() {
        let factory = GenericRequestFactory::new();
        assert!(factory.create(&headers(&[("accept", "*/*")])).is_err());
        assert!(factory.create(&headers(&[("user-agent", "  ")])).is_err());
    }
}
