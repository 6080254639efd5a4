//! Fixture file loading

use crate::row::FixtureRow;
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use ua_fixture_sources_common::{FixtureError, Result};

/// On-disk formats fixtures come in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Yaml,
    Json,
}

impl FixtureFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(FixtureFormat::Yaml),
            "json" => Some(FixtureFormat::Json),
            _ => None,
        }
    }

    /// Parse a document into a YAML value tree
    pub fn parse(&self, content: &str) -> Result<Value> {
        match self {
            FixtureFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            FixtureFormat::Json => {
                let json: serde_json::Value = serde_json::from_str(content)?;
                Ok(serde_yaml::to_value(json)?)
            }
        }
    }
}

/// Load the rows of one fixture file
///
/// Returns `Ok(None)` when the document parses but is neither a list nor a
/// mapping of rows; callers skip such files without complaint.
pub fn load_fixture_file(path: &Path) -> Result<Option<Vec<FixtureRow>>> {
    let format = FixtureFormat::from_path(path).ok_or_else(|| {
        FixtureError::Parse(format!(
            "Unsupported fixture file extension: {}",
            path.display()
        ))
    })?;

    let content = fs::read_to_string(path).map_err(|e| {
        FixtureError::Parse(format!(
            "Failed to read fixture file {}: {}",
            path.display(),
            e
        ))
    })?;

    let document = format.parse(&content).map_err(|e| {
        FixtureError::Parse(format!(
            "Failed to parse fixture file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(parse_rows(document))
}

/// Flatten a parsed fixture document into rows
///
/// * a sequence holds one row per mapping item
/// * a mapping with a `user_agent` key is a single row
/// * any other mapping holds one row per mapping value (keyed fixtures)
///
/// Non-mapping items inside a sequence or keyed mapping are dropped.
pub fn parse_rows(document: Value) -> Option<Vec<FixtureRow>> {
    match document {
        Value::Sequence(items) => Some(items.into_iter().filter_map(into_row).collect()),
        Value::Mapping(mapping) if mapping.contains_key("user_agent") => {
            Some(vec![FixtureRow::new(mapping)])
        }
        Value::Mapping(mapping) => Some(
            mapping
                .into_iter()
                .filter_map(|(_, value)| into_row(value))
                .collect(),
        ),
        Value::Tagged(tagged) => parse_rows(tagged.value),
        _ => None,
    }
}

fn into_row(value: Value) -> Option<FixtureRow> {
    match value {
        Value::Mapping(mapping) => Some(FixtureRow::new(mapping)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            FixtureFormat::from_path(Path::new("a/b.yml")),
            Some(FixtureFormat::Yaml)
        );
        assert_eq!(
            FixtureFormat::from_path(Path::new("b.YAML")),
            Some(FixtureFormat::Yaml)
        );
        assert_eq!(
            FixtureFormat::from_path(Path::new("b.json")),
            Some(FixtureFormat::Json)
        );
        assert_eq!(FixtureFormat::from_path(Path::new("b.php")), None);
        assert_eq!(FixtureFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_parse_sequence() {
        let doc = serde_yaml::from_str("- user_agent: a\n- 17\n- user_agent: b").unwrap();
        let rows = parse_rows(doc).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].user_agent().as_deref(), Some("b"));
    }

    #[test]
    fn test_parse_single_row_mapping() {
        let doc = serde_yaml::from_str("user_agent: a\nclient: ~").unwrap();
        let rows = parse_rows(doc).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_parse_keyed_mapping_keeps_order() {
        let doc = serde_yaml::from_str(
            "issue-2:\n  user_agent: second\nissue-1:\n  user_agent: first",
        )
        .unwrap();
        let rows = parse_rows(doc).unwrap();
        let agents: Vec<_> = rows.iter().filter_map(|r| r.user_agent()).collect();
        assert_eq!(agents, vec!["second", "first"]);
    }

    #[test]
    fn test_scalar_document_is_malformed() {
        assert!(parse_rows(serde_yaml::from_str("just text").unwrap()).is_none());
        assert!(parse_rows(Value::Null).is_none());
    }

    #[test]
    fn test_load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fixtures.json");
        fs::write(&path, r#"[{"user_agent": "json-agent", "os": {"name": "Android"}}]"#).unwrap();

        let rows = load_fixture_file(&path).unwrap().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_agent().as_deref(), Some("json-agent"));
    }

    #[test]
    fn test_load_keyed_json_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keyed.json");
        fs::write(
            &path,
            r#"{"zz-case": {"user_agent": "first-in-file"}, "aa-case": {"user_agent": "second-in-file"}}"#,
        )
        .unwrap();

        let rows = load_fixture_file(&path).unwrap().unwrap();
        let agents: Vec<_> = rows.iter().filter_map(|r| r.user_agent()).collect();
        assert_eq!(agents, vec!["first-in-file", "second-in-file"]);
    }

    #[test]
    fn test_load_syntax_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.yml");
        fs::write(&path, "- user_agent: [unclosed").unwrap();

        let err = load_fixture_file(&path).unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_fixture_file(&PathBuf::from("/nonexistent/a.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read fixture file"));
    }
}
