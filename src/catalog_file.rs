//! Catalog file handling for loading and saving catalog overrides.
//!
//! The studio ships with a built-in catalog. A JSON file with the same shape
//! can replace it at startup (`--catalog <FILE>`), which lets prices and copy
//! change without a rebuild.
//!
//! ```json
//! {
//!   "packages": [{ "id": "brand-starter", "title": "...", "description": "...", "base_price": 8000 }],
//!   "addon_groups": [{ "group": "frontend", "addons": [{ "id": "logo", "title": "...", "description": "...", "price": 4500 }] }]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::{AddOn, AddonGroup, AddonGroupEntry, Catalog, Package};

/// One add-on group as written in the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonGroupDocument {
    pub group: AddonGroup,
    #[serde(default)]
    pub addons: Vec<AddOn>,
}

/// On-disk catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub packages: Vec<Package>,
    #[serde(default)]
    pub addon_groups: Vec<AddonGroupDocument>,
}

impl CatalogDocument {
    /// Save the document to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Pretty-printed JSON for `catalog --json`
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a document from a JSON file (not yet validated)
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let document: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        Ok(document)
    }

    /// Validate the document by building a catalog from it
    pub fn validate(&self) -> Result<()> {
        self.clone().into_catalog().map(|_| ())
    }

    /// Convert into a validated catalog, tagging each add-on with its group.
    pub fn into_catalog(self) -> Result<Catalog> {
        let groups = self
            .addon_groups
            .into_iter()
            .map(|doc| AddonGroupEntry {
                group: doc.group,
                addons: doc
                    .addons
                    .into_iter()
                    .map(|addon| AddOn {
                        group: doc.group,
                        ..addon
                    })
                    .collect(),
            })
            .collect();

        Catalog::new(self.packages, groups).context("Catalog failed validation")
    }
}

impl From<&Catalog> for CatalogDocument {
    fn from(catalog: &Catalog) -> Self {
        Self {
            packages: catalog.list_packages().to_vec(),
            addon_groups: catalog
                .list_addon_groups()
                .iter()
                .map(|entry| AddonGroupDocument {
                    group: entry.group,
                    addons: entry.addons.clone(),
                })
                .collect(),
        }
    }
}

/// Load and validate a catalog from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    CatalogDocument::load_from_file(path)?
        .into_catalog()
        .with_context(|| format!("Invalid catalog in {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_survives_save_and_load() {
        let catalog = Catalog::builtin();
        let temp_file = NamedTempFile::new().unwrap();

        CatalogDocument::from(&catalog)
            .save_to_file(temp_file.path())
            .unwrap();
        let loaded = load_catalog(temp_file.path()).unwrap();

        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let json = r#"{
            "packages": [
                { "id": "basic", "title": "Basic", "description": "One page", "base_price": 1000 }
            ],
            "addon_groups": [
                { "group": "backend", "addons": [
                    { "id": "ssl", "title": "SSL", "description": "Certificates", "price": 500 }
                ] }
            ]
        }"#;
        temp_file.write_all(json.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let catalog = load_catalog(temp_file.path()).unwrap();
        assert_eq!(catalog.first_package().id.as_str(), "basic");
        assert!(catalog.first_package().features.is_empty());
        assert_eq!(catalog.addon("ssl").map(|a| a.group), Some(AddonGroup::Backend));
    }

    #[test]
    fn test_duplicate_ids_fail_validation() {
        let json = r#"{
            "packages": [{ "id": "basic", "title": "Basic", "description": "", "base_price": 1 }],
            "addon_groups": [
                { "group": "frontend", "addons": [{ "id": "x", "title": "X", "description": "", "price": 1 }] },
                { "group": "backend", "addons": [{ "id": "x", "title": "X", "description": "", "price": 1 }] }
            ]
        }"#;
        let document: CatalogDocument = serde_json::from_str(json).unwrap();
        assert!(document.validate().is_err());
    }

    #[test]
    fn test_to_json_parses_back() {
        let json = CatalogDocument::from(&Catalog::builtin()).to_json().unwrap();
        let document: CatalogDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(document.into_catalog().unwrap(), Catalog::builtin());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(format!("{:#}", err).contains("catalog.json"));
    }

    #[test]
    fn test_negative_price_is_a_parse_error() {
        let json = r#"{ "packages": [{ "id": "a", "title": "A", "description": "", "base_price": -5 }] }"#;
        assert!(serde_json::from_str::<CatalogDocument>(json).is_err());
    }
}
