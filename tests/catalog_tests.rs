//! Tests for the catalog and catalog files
//!
//! These tests verify:
//! - Built-in catalog contents and ordering
//! - JSON export / import through temp files
//! - Rejection of invalid catalog documents

use hotfixers::catalog::{AddonGroup, Catalog};
use hotfixers::catalog_file::{load_catalog, CatalogDocument};
use hotfixers::engine::ConfigurationEngine;
use std::io::Write;
use std::sync::Arc;
use tempfile::{tempdir, NamedTempFile};

fn write_temp(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_builtin_packages_in_display_order() {
    let catalog = Catalog::builtin();
    let ids: Vec<&str> = catalog
        .list_packages()
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["brand-starter", "product-showcase", "full-ecommerce"]);
}

#[test]
fn test_builtin_groups_and_prices() {
    let catalog = Catalog::builtin();
    let groups = catalog.list_addon_groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].group, AddonGroup::Frontend);
    assert_eq!(groups[1].group, AddonGroup::Backend);

    let price = |id: &str| catalog.addon(id).map(|a| a.price);
    assert_eq!(price("logo"), Some(4500));
    assert_eq!(price("content"), Some(5000));
    assert_eq!(price("anim"), Some(2500));
    assert_eq!(price("seo"), Some(3500));
    assert_eq!(price("deploy"), Some(2000));
    assert_eq!(price("security"), Some(3000));
}

#[test]
fn test_export_then_load_matches_builtin() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    CatalogDocument::from(&Catalog::builtin())
        .save_to_file(&path)
        .unwrap();
    let loaded = load_catalog(&path).unwrap();

    assert_eq!(loaded, Catalog::builtin());
}

#[test]
fn test_minimal_document_loads_with_defaults() {
    let file = write_temp(
        r#"{
            "packages": [
                { "id": "landing", "title": "Landing Page", "description": "One page", "base_price": 5000 }
            ],
            "addon_groups": [
                { "group": "backend", "addons": [
                    { "id": "hosting", "title": "Hosting", "description": "A year", "price": 1200 }
                ] }
            ]
        }"#,
    );

    let catalog = load_catalog(file.path()).unwrap();
    let package = catalog.first_package();
    assert_eq!(package.id.as_str(), "landing");
    assert!(package.highlights.is_empty());
    assert!(!package.top_choice);
    assert_eq!(catalog.addon("hosting").map(|a| a.group), Some(AddonGroup::Backend));

    let mut engine = ConfigurationEngine::new(Arc::new(catalog), None);
    engine.toggle_addon("hosting").unwrap();
    assert_eq!(engine.grand_total(), 6200);
}

#[test]
fn test_empty_package_list_rejected() {
    let file = write_temp(r#"{ "packages": [], "addon_groups": [] }"#);
    let err = load_catalog(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("at least one package"));
}

#[test]
fn test_duplicate_addon_across_groups_rejected() {
    let file = write_temp(
        r#"{
            "packages": [{ "id": "a", "title": "A", "description": "", "base_price": 1 }],
            "addon_groups": [
                { "group": "frontend", "addons": [{ "id": "seo", "title": "x", "description": "", "price": 1 }] },
                { "group": "backend", "addons": [{ "id": "seo", "title": "y", "description": "", "price": 2 }] }
            ]
        }"#,
    );
    let document = CatalogDocument::load_from_file(file.path()).unwrap();
    let err = document.validate().unwrap_err();
    assert!(format!("{:#}", err).contains("duplicate add-on id 'seo'"));
}

#[test]
fn test_unknown_group_is_parse_error() {
    let file = write_temp(
        r#"{
            "packages": [{ "id": "a", "title": "A", "description": "", "base_price": 1 }],
            "addon_groups": [{ "group": "middleware", "addons": [] }]
        }"#,
    );
    assert!(CatalogDocument::load_from_file(file.path()).is_err());
}

#[test]
fn test_overflowing_prices_rejected() {
    let file = write_temp(
        r#"{
            "packages": [{ "id": "a", "title": "A", "description": "", "base_price": 18446744073709551615 }],
            "addon_groups": [
                { "group": "frontend", "addons": [{ "id": "extra", "title": "Extra", "description": "", "price": 1 }] }
            ]
        }"#,
    );
    let err = load_catalog(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("exceeds the representable price range"));
}

#[test]
fn test_largest_quote_fits_exactly() {
    let file = write_temp(
        r#"{
            "packages": [{ "id": "a", "title": "A", "description": "", "base_price": 18446744073709551614 }],
            "addon_groups": [
                { "group": "backend", "addons": [{ "id": "extra", "title": "Extra", "description": "", "price": 1 }] }
            ]
        }"#,
    );
    let mut engine = ConfigurationEngine::new(Arc::new(load_catalog(file.path()).unwrap()), None);
    engine.toggle_addon("extra").unwrap();
    assert_eq!(engine.grand_total(), u64::MAX);
}
