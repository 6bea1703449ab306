//! Configuration Engine
//!
//! Owns one visitor's package selection, add-on set, and review session, and
//! derives prices from them on every read.
//!
//! # Operations
//!
//! | Operation          | Effect |
//! |--------------------|--------|
//! | `select_package`   | Replace the single selected package |
//! | `toggle_addon`     | Insert or remove one add-on (an involution) |
//! | `active_addons`    | Selected add-ons in catalog declaration order |
//! | `addons_total`     | Sum of selected add-on prices |
//! | `grand_total`      | Base price + add-ons total |
//! | `open_review` etc. | Drive the [`ReviewSession`] state machine |
//!
//! # Invariants
//!
//! - Exactly one package is selected and it always resolves in the catalog
//! - Selected add-ons are always a subset of the catalog's add-ons
//! - Totals are computed from live state, never cached or snapshotted

use crate::catalog::{AddOn, AddonGroup, AddonId, Catalog, Package, PackageId};
use crate::engine::quote::{QuoteLine, QuoteSummary};
use crate::review::{ReviewSession, ReviewTransitionError};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// A package or add-on id that does not exist in the catalog.
///
/// The screens render ids straight from the catalog, so this signals a
/// collaborator bug rather than a visitor mistake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown package '{0}'")]
    UnknownPackage(PackageId),

    #[error("unknown add-on '{0}'")]
    UnknownAddon(AddonId),
}

/// Where the visitor asked to go next. The engine only reports the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    Home,
    Configure { package: Option<PackageId> },
    Details { package: PackageId },
}

/// The visitor's current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    selected_package: PackageId,
    selected_addons: HashSet<AddonId>,
}

impl Configuration {
    pub fn selected_package(&self) -> &PackageId {
        &self.selected_package
    }

    pub fn selected_addons(&self) -> &HashSet<AddonId> {
        &self.selected_addons
    }
}

/// One add-on with its toggle state, for rendering.
#[derive(Debug, Clone, Copy)]
pub struct AddonRow<'a> {
    pub addon: &'a AddOn,
    pub selected: bool,
}

/// One add-on group with its rows, in catalog order.
#[derive(Debug, Clone)]
pub struct AddonGroupView<'a> {
    pub group: AddonGroup,
    pub rows: Vec<AddonRow<'a>>,
}

/// Selection + pricing + review state for a single configurator visit.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hotfixers::catalog::Catalog;
/// use hotfixers::engine::ConfigurationEngine;
///
/// let mut engine = ConfigurationEngine::new(Arc::new(Catalog::builtin()), None);
/// assert_eq!(engine.active_package().id.as_str(), "brand-starter");
///
/// engine.toggle_addon("seo").unwrap();
/// assert_eq!(engine.grand_total(), 8000 + 3500);
///
/// assert!(engine.select_package("no-such-package").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurationEngine {
    catalog: Arc<Catalog>,
    config: Configuration,
    review: ReviewSession,
}

impl ConfigurationEngine {
    /// Start a fresh session.
    ///
    /// An unknown or missing `initial_package` falls back to the catalog's
    /// first package. This is the only place the engine falls back silently.
    pub fn new(catalog: Arc<Catalog>, initial_package: Option<&str>) -> Self {
        let selected_package = match initial_package {
            Some(id) => match catalog.package(id) {
                Some(package) => package.id.clone(),
                None => {
                    warn!(package = id, "unknown initial package, using first catalog entry");
                    catalog.first_package().id.clone()
                }
            },
            None => catalog.first_package().id.clone(),
        };
        info!(package = %selected_package, "configurator session started");

        Self {
            catalog,
            config: Configuration {
                selected_package,
                selected_addons: HashSet::new(),
            },
            review: ReviewSession::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn review(&self) -> &ReviewSession {
        &self.review
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Make `id` the selected package. Re-selecting the current package is a no-op.
    pub fn select_package(&mut self, id: &str) -> Result<(), SelectionError> {
        let package = self
            .catalog
            .package(id)
            .ok_or_else(|| SelectionError::UnknownPackage(PackageId::from(id)))?;
        debug!(package = %package.id, "package selected");
        self.config.selected_package = package.id.clone();
        Ok(())
    }

    /// Flip membership of add-on `id`. Returns whether it is selected afterwards.
    pub fn toggle_addon(&mut self, id: &str) -> Result<bool, SelectionError> {
        let addon = self
            .catalog
            .addon(id)
            .ok_or_else(|| SelectionError::UnknownAddon(AddonId::from(id)))?;

        let selected = if self.config.selected_addons.remove(id) {
            false
        } else {
            self.config.selected_addons.insert(addon.id.clone());
            true
        };
        debug!(addon = %addon.id, selected, "add-on toggled");
        Ok(selected)
    }

    pub fn is_package_selected(&self, id: &str) -> bool {
        self.config.selected_package.as_str() == id
    }

    pub fn is_selected(&self, addon_id: &str) -> bool {
        self.config.selected_addons.contains(addon_id)
    }

    // ------------------------------------------------------------------------
    // Derived read model
    // ------------------------------------------------------------------------

    /// The selected package.
    pub fn active_package(&self) -> &Package {
        // Every write to `selected_package` is checked against the catalog
        self.catalog
            .package(self.config.selected_package.as_str())
            .unwrap_or_else(|| self.catalog.first_package())
    }

    /// Selected add-ons in catalog declaration order, regardless of toggle order.
    pub fn active_addons(&self) -> Vec<&AddOn> {
        self.catalog
            .addons()
            .filter(|addon| self.config.selected_addons.contains(&addon.id))
            .collect()
    }

    pub fn addons_total(&self) -> u64 {
        self.active_addons().iter().map(|addon| addon.price).sum()
    }

    pub fn grand_total(&self) -> u64 {
        self.active_package().base_price + self.addons_total()
    }

    /// Every add-on group with per-row toggle state.
    pub fn addon_rows(&self) -> Vec<AddonGroupView<'_>> {
        self.catalog
            .list_addon_groups()
            .iter()
            .map(|entry| AddonGroupView {
                group: entry.group,
                rows: entry
                    .addons
                    .iter()
                    .map(|addon| AddonRow {
                        addon,
                        selected: self.is_selected(addon.id.as_str()),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Owned snapshot of the current quote, for printing or serialization.
    pub fn summary(&self) -> QuoteSummary {
        let package = self.active_package();
        QuoteSummary {
            package: QuoteLine {
                id: package.id.to_string(),
                title: package.title.clone(),
                price: package.base_price,
            },
            addons: self
                .active_addons()
                .into_iter()
                .map(|addon| QuoteLine {
                    id: addon.id.to_string(),
                    title: addon.title.clone(),
                    price: addon.price,
                })
                .collect(),
            addons_total: self.addons_total(),
            grand_total: self.grand_total(),
            order_reference: self
                .review
                .order_reference()
                .map(|reference| reference.to_string()),
        }
    }

    // ------------------------------------------------------------------------
    // Review
    // ------------------------------------------------------------------------

    pub fn open_review(&mut self) {
        self.review.open();
    }

    pub fn close_review(&mut self) {
        self.review.close();
    }

    pub fn submit_review(&mut self) -> Result<(), ReviewTransitionError> {
        self.review.submit()?;
        info!(
            package = %self.config.selected_package,
            addons = self.config.selected_addons.len(),
            total = self.grand_total(),
            "mock order placed"
        );
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Navigation intents
    // ------------------------------------------------------------------------

    /// Ask to see the details page of package `id`.
    pub fn request_details(&self, id: &str) -> Result<NavigationRequest, SelectionError> {
        let package = self
            .catalog
            .package(id)
            .ok_or_else(|| SelectionError::UnknownPackage(PackageId::from(id)))?;
        Ok(NavigationRequest::Details {
            package: package.id.clone(),
        })
    }

    pub fn request_home(&self) -> NavigationRequest {
        NavigationRequest::Home
    }
}
