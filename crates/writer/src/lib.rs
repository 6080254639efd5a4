//! Export of normalized test cases into fixture files
//!
//! Test cases are written in chunks of `tests-NNNN.yaml` (rendered through
//! tera templates) or `tests-NNNN.json` files, followed by a `summary.md`
//! with counts per browser, platform and device type.

mod templates;

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;
use ua_fixture_sources_common::{BrowscapProperties, FixtureError, Result, TestCase};

/// Test cases per export file unless configured otherwise
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Yaml,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Yaml => "yaml",
            ExportFormat::Json => "json",
        }
    }
}

/// One exported test case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    pub user_agent: String,
    pub headers: BTreeMap<String, String>,
    pub properties: BrowscapProperties,
}

impl From<&TestCase> for ExportRecord {
    fn from(case: &TestCase) -> Self {
        Self {
            user_agent: case.request.user_agent.clone(),
            headers: case.request.headers.clone(),
            properties: BrowscapProperties::from(case),
        }
    }
}

/// How often a value occurred in an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub name: String,
    pub count: usize,
}

/// What an export wrote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub source: String,
    pub total: usize,
    /// File names relative to the output directory
    pub files: Vec<String>,
    pub browsers: Vec<Count>,
    pub platforms: Vec<Count>,
    pub device_types: Vec<Count>,
}

#[derive(Default)]
struct Tally {
    browsers: HashMap<String, usize>,
    platforms: HashMap<String, usize>,
    device_types: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, case: &TestCase) {
        let browser = case.browser.name.as_deref().unwrap_or("unknown");
        let platform = case.platform.name.as_deref().unwrap_or("unknown");
        let device_type = case.device.kind.map(|k| k.as_str()).unwrap_or("unknown");

        *self.browsers.entry(browser.to_string()).or_default() += 1;
        *self.platforms.entry(platform.to_string()).or_default() += 1;
        *self.device_types.entry(device_type.to_string()).or_default() += 1;
    }
}

/// Most frequent first, then by name
fn sorted_counts(counts: HashMap<String, usize>) -> Vec<Count> {
    let mut counts: Vec<Count> = counts
        .into_iter()
        .map(|(name, count)| Count { name, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    counts
}

/// Fixture writer
///
/// Writes into one output directory, creating it if needed. Existing
/// `tests-NNNN` files with the same names are overwritten.
pub struct FixtureWriter {
    output_dir: PathBuf,
    format: ExportFormat,
    chunk_size: usize,
    tera: Tera,
}

impl FixtureWriter {
    pub fn new(output_dir: impl Into<PathBuf>, format: ExportFormat) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self {
            output_dir: output_dir.into(),
            format,
            chunk_size: DEFAULT_CHUNK_SIZE,
            tera,
        })
    }

    /// Test cases per file; `0` keeps the default
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        if chunk_size > 0 {
            self.chunk_size = chunk_size;
        }
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write all test cases, then the summary
    pub fn write<I>(&self, source: &str, cases: I) -> Result<ExportSummary>
    where
        I: IntoIterator<Item = TestCase>,
    {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            FixtureError::Export(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let mut summary = ExportSummary {
            source: source.to_string(),
            ..Default::default()
        };
        let mut tally = Tally::default();
        let mut chunk: Vec<ExportRecord> = Vec::with_capacity(self.chunk_size);

        for case in cases {
            tally.add(&case);
            chunk.push(ExportRecord::from(&case));
            summary.total += 1;

            if chunk.len() == self.chunk_size {
                let name = self.write_chunk(source, summary.files.len(), &chunk)?;
                summary.files.push(name);
                chunk.clear();
            }
        }

        if !chunk.is_empty() {
            let name = self.write_chunk(source, summary.files.len(), &chunk)?;
            summary.files.push(name);
        }

        summary.browsers = sorted_counts(tally.browsers);
        summary.platforms = sorted_counts(tally.platforms);
        summary.device_types = sorted_counts(tally.device_types);

        self.write_summary(&summary)?;

        tracing::debug!(
            source,
            total = summary.total,
            files = summary.files.len(),
            "export finished"
        );
        Ok(summary)
    }

    fn write_chunk(&self, source: &str, index: usize, records: &[ExportRecord]) -> Result<String> {
        let name = format!("tests-{:04}.{}", index, self.format.extension());

        let rendered = match self.format {
            ExportFormat::Yaml => {
                let mut context = tera::Context::new();
                context.insert("source", source);
                context.insert("chunk", &(index + 1));
                context.insert("cases", records);
                self.tera
                    .render("fixtures.yaml", &context)
                    .map_err(|e| FixtureError::Export(format!("Template error: {:?}", e)))?
            }
            ExportFormat::Json => serde_json::to_string_pretty(records)?,
        };

        fs::write(self.output_dir.join(&name), rendered)
            .map_err(|e| FixtureError::Export(format!("Failed to write {}: {}", name, e)))?;

        tracing::debug!(file = %name, records = records.len(), "wrote export chunk");
        Ok(name)
    }

    fn write_summary(&self, summary: &ExportSummary) -> Result<()> {
        let context = tera::Context::from_serialize(summary)
            .map_err(|e| FixtureError::Export(format!("Template error: {}", e)))?;
        let rendered = self
            .tera
            .render("summary.md", &context)
            .map_err(|e| FixtureError::Export(format!("Template error: {:?}", e)))?;

        fs::write(self.output_dir.join("summary.md"), rendered)
            .map_err(|e| FixtureError::Export(format!("Failed to write summary.md: {}", e)))?;

        Ok(())
    }
}

/// Export test cases with default settings (convenience function)
pub fn export<I>(
    source: &str,
    cases: I,
    output_dir: &Path,
    format: ExportFormat,
) -> Result<ExportSummary>
where
    I: IntoIterator<Item = TestCase>,
{
    FixtureWriter::new(output_dir, format)?.write(source, cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ua_fixture_sources_common::{DeviceType, Request};

    #[test]
    fn test_sorted_counts() {
        let counts = HashMap::from([
            ("Safari".to_string(), 1),
            ("Chrome".to_string(), 3),
            ("Firefox".to_string(), 1),
        ]);
        let names: Vec<String> = sorted_counts(counts).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Chrome", "Firefox", "Safari"]);
    }

    #[test]
    fn test_tally_unknown_fields() {
        let mut tally = Tally::default();
        let mut case = TestCase::new(Request::from_user_agent("ua"));
        tally.add(&case);
        case.device.kind = Some(DeviceType::Tablet);
        tally.add(&case);

        assert_eq!(tally.browsers.get("unknown"), Some(&2));
        assert_eq!(tally.device_types.get("unknown"), Some(&1));
        assert_eq!(tally.device_types.get("Tablet"), Some(&1));
    }

    #[test]
    fn test_zero_chunk_size_keeps_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let writer = FixtureWriter::new(dir.path(), ExportFormat::Json)
            .unwrap()
            .with_chunk_size(0);
        assert_eq!(writer.chunk_size, DEFAULT_CHUNK_SIZE);
    }
}
