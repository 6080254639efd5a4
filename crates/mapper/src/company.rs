//! Company lookups backed by YAML company lists

use std::fs;
use std::path::Path;
use ua_fixture_sources_common::{Company, CompanyLoader, FixtureError, Result};

const BUILTIN_COMPANIES: &str = include_str!("../data/companies.yaml");

/// In-memory company list
///
/// Starts from the built-in list; overlays replace entries with the same
/// key and append new ones.
#[derive(Debug, Clone)]
pub struct CompanyRegistry {
    companies: Vec<Company>,
}

impl CompanyRegistry {
    /// Registry holding the built-in companies
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_COMPANIES)
    }

    /// Registry holding exactly the companies of a YAML list
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let companies: Vec<Company> = serde_yaml::from_str(yaml)?;
        Ok(Self { companies })
    }

    /// Merge a YAML company list file into this registry
    pub fn with_overlay(mut self, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FixtureError::Config(format!(
                "Failed to read company list {}: {}",
                path.display(),
                e
            ))
        })?;
        let overlay = Self::from_yaml(&content).map_err(|e| {
            FixtureError::Config(format!(
                "Failed to parse company list {}: {}",
                path.display(),
                e
            ))
        })?;

        for company in overlay.companies {
            match self.companies.iter_mut().find(|c| c.key == company.key) {
                Some(existing) => *existing = company,
                None => self.companies.push(company),
            }
        }

        tracing::debug!(file = %path.display(), total = self.companies.len(), "merged company list");
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

impl CompanyLoader for CompanyRegistry {
    fn load(&self, key: &str) -> Result<Company> {
        self.companies
            .iter()
            .find(|c| c.key == key)
            .cloned()
            .ok_or_else(|| FixtureError::NotFound(format!("company with key {:?}", key)))
    }

    fn search_by_name(&self, name: &str) -> Result<Company> {
        let name = name.trim();
        self.companies
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| FixtureError::NotFound(format!("company named {:?}", name)))
    }

    fn search_by_brand_name(&self, brand_name: &str) -> Result<Company> {
        let brand_name = brand_name.trim();
        self.companies
            .iter()
            .find(|c| {
                c.brand_name
                    .as_deref()
                    .is_some_and(|b| b.eq_ignore_ascii_case(brand_name))
            })
            .or_else(|| {
                self.companies
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(brand_name))
            })
            .cloned()
            .ok_or_else(|| FixtureError::NotFound(format!("company with brand {:?}", brand_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_list_loads() {
        let registry = CompanyRegistry::builtin().unwrap();
        assert!(!registry.is_empty());

        let google = registry.load("google").unwrap();
        assert_eq!(google.name, "Google Inc.");
        assert_eq!(google.brand_name.as_deref(), Some("Google"));
    }

    #[test]
    fn test_load_unknown_key() {
        let registry = CompanyRegistry::builtin().unwrap();
        assert!(matches!(
            registry.load("no-such-company"),
            Err(FixtureError::NotFound(_))
        ));
    }

    #[test]
    fn test_search_by_name_ignores_case() {
        let registry = CompanyRegistry::builtin().unwrap();
        assert_eq!(registry.search_by_name("google inc.").unwrap().key, "google");
        assert!(registry.search_by_name("Google").is_err());
    }

    #[test]
    fn test_search_by_brand_name() {
        let registry = CompanyRegistry::builtin().unwrap();
        assert_eq!(
            registry.search_by_brand_name("samsung").unwrap().key,
            "samsung"
        );
        assert_eq!(
            registry.search_by_brand_name("Sony Ericsson").unwrap().key,
            "sony-ericsson"
        );
        // falls back to the legal name
        assert_eq!(
            registry.search_by_brand_name("Apple Inc.").unwrap().key,
            "apple"
        );
        assert!(registry.search_by_brand_name("Fairphone").is_err());
    }

    #[test]
    fn test_overlay_replaces_and_appends() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "- key: google\n  name: Google LLC\n  brand_name: Google\n- key: fairphone\n  name: Fairphone B.V.\n  brand_name: Fairphone"
        )
        .unwrap();

        let builtin = CompanyRegistry::builtin().unwrap();
        let before = builtin.len();
        let registry = builtin.with_overlay(file.path()).unwrap();

        assert_eq!(registry.len(), before + 1);
        assert_eq!(registry.load("google").unwrap().name, "Google LLC");
        assert_eq!(
            registry.search_by_brand_name("Fairphone").unwrap().key,
            "fairphone"
        );
    }

    #[test]
    fn test_overlay_missing_file() {
        let err = CompanyRegistry::builtin()
            .unwrap()
            .with_overlay(Path::new("/nonexistent/companies.yaml"))
            .unwrap_err();
        assert!(matches!(err, FixtureError::Config(_)));
    }
}
