//! Integration tests for fixture export

use std::fs;
use tempfile::TempDir;
use ua_fixture_sources_common::{Browser, BrowserType, Company, DeviceType, Request, TestCase};
use ua_fixture_sources_writer::{export, ExportFormat, FixtureWriter};

fn chrome(user_agent: &str) -> TestCase {
    let mut case = TestCase::new(Request::from_user_agent(user_agent));
    case.browser = Browser {
        name: Some("Chrome".to_string()),
        version: Some("120.0".to_string()),
        manufacturer: Some(Company {
            key: "google".to_string(),
            name: "Google Inc.".to_string(),
            brand_name: Some("Google".to_string()),
        }),
        kind: Some(BrowserType::Browser),
        bits: None,
        modus: None,
    };
    case.platform.name = Some("Windows".to_string());
    case.platform.bits = Some(64);
    case.device.kind = Some(DeviceType::Desktop);
    case.device.dual_orientation = Some(false);
    case
}

fn cases() -> Vec<TestCase> {
    vec![
        chrome("Mozilla/5.0 (Windows NT 10.0) Chrome/120.0"),
        chrome("Mozilla/5.0 (Windows NT 6.1) Chrome/120.0 # comment: like"),
        TestCase::new(Request::from_user_agent("curl/8.0")),
    ]
}

#[test]
fn test_yaml_export_in_chunks() {
    let dir = TempDir::new().unwrap();
    let summary = FixtureWriter::new(dir.path(), ExportFormat::Yaml)
        .unwrap()
        .with_chunk_size(2)
        .write("piwik", cases())
        .unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.files, vec!["tests-0000.yaml", "tests-0001.yaml"]);

    let first = fs::read_to_string(dir.path().join("tests-0000.yaml")).unwrap();
    let records: Vec<serde_yaml::Value> = serde_yaml::from_str(&first).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[1]["user_agent"].as_str(),
        Some("Mozilla/5.0 (Windows NT 6.1) Chrome/120.0 # comment: like")
    );
    assert_eq!(
        records[0]["headers"]["user-agent"].as_str(),
        Some("Mozilla/5.0 (Windows NT 10.0) Chrome/120.0")
    );
    assert_eq!(records[0]["properties"]["Browser_Name"].as_str(), Some("Chrome"));
    assert_eq!(
        records[0]["properties"]["Browser_Maker"].as_str(),
        Some("Google Inc.")
    );
    assert_eq!(records[0]["properties"]["Platform_Bits"].as_u64(), Some(64));
    assert_eq!(
        records[0]["properties"]["Device_Dual_Orientation"].as_bool(),
        Some(false)
    );

    let second = fs::read_to_string(dir.path().join("tests-0001.yaml")).unwrap();
    let records: Vec<serde_yaml::Value> = serde_yaml::from_str(&second).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["user_agent"].as_str(), Some("curl/8.0"));
    assert!(records[0]["properties"]["Browser_Name"].is_null());
}

#[test]
fn test_yaml_properties_in_browscap_order() {
    let dir = TempDir::new().unwrap();
    export("piwik", cases(), dir.path(), ExportFormat::Yaml).unwrap();

    let content = fs::read_to_string(dir.path().join("tests-0000.yaml")).unwrap();
    let records: Vec<serde_yaml::Value> = serde_yaml::from_str(&content).unwrap();
    let keys: Vec<&str> = records[0]["properties"]
        .as_mapping()
        .unwrap()
        .keys()
        .filter_map(|k| k.as_str())
        .collect();

    assert_eq!(keys.len(), 22);
    assert_eq!(
        &keys[..4],
        &["Browser_Name", "Browser_Type", "Browser_Bits", "Browser_Maker"]
    );
    assert_eq!(keys[21], "RenderingEngine_Maker");
}

#[test]
fn test_json_export() {
    let dir = TempDir::new().unwrap();
    let summary = export("piwik", cases(), dir.path(), ExportFormat::Json).unwrap();

    assert_eq!(summary.files, vec!["tests-0000.json"]);

    let content = fs::read_to_string(dir.path().join("tests-0000.json")).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["properties"]["Device_Type"], "Desktop");
    assert!(records[2]["properties"]["Device_Type"].is_null());
}

#[test]
fn test_summary_counts() {
    let dir = TempDir::new().unwrap();
    let summary = export("piwik", cases(), dir.path(), ExportFormat::Yaml).unwrap();

    assert_eq!(summary.browsers[0].name, "Chrome");
    assert_eq!(summary.browsers[0].count, 2);
    assert_eq!(summary.browsers[1].name, "unknown");

    let markdown = fs::read_to_string(dir.path().join("summary.md")).unwrap();
    assert!(markdown.starts_with("# piwik export"));
    assert!(markdown.contains("3 test cases in 1 file(s)."));
    assert!(markdown.contains("- `tests-0000.yaml`"));
    assert!(markdown.contains("| Chrome | 2 |"));
    assert!(markdown.contains("| Windows | 2 |"));
    assert!(markdown.contains("| Desktop | 2 |"));
    assert!(markdown.contains("| unknown | 1 |"));
}

#[test]
fn test_empty_export_writes_only_summary() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested/out");
    let summary = export("browscap", Vec::new(), &out, ExportFormat::Yaml).unwrap();

    assert_eq!(summary.total, 0);
    assert!(summary.files.is_empty());
    assert!(out.join("summary.md").exists());
    assert!(!out.join("tests-0000.yaml").exists());
}
