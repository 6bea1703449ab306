//! Hotfixers Library
//!
//! Package catalog, configuration engine, and terminal storefront for the
//! Hotfixers web studio.

pub mod app;
pub mod catalog;
pub mod catalog_file;
pub mod cli;
pub mod components;
pub mod engine;
pub mod error;
pub mod review;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{AddOn, AddonGroup, AddonId, Catalog, CatalogError, Package, PackageId};
pub use catalog_file::{load_catalog, CatalogDocument};
pub use engine::{ConfigurationEngine, NavigationRequest, QuoteSummary, SelectionError};
pub use error::HotfixersError;
pub use review::{OrderReference, ReviewSession, ReviewState, ReviewTransitionError};
pub use ui::format::format_price;
