//! Service catalog: packages and grouped add-ons
//!
//! The catalog is the single source of truth for everything the configurator
//! prices and every screen renders. It is built once (either the built-in
//! studio catalog or a JSON override, see [`crate::catalog_file`]) and then
//! shared read-only behind an `Arc`.
//!
//! # Invariants
//!
//! - At least one package exists
//! - Package ids are unique
//! - Add-on ids are unique across *all* groups (frontend and backend share a
//!   namespace for lookup)
//! - Every add-on's `group` matches the group it is declared under
//! - The priciest package plus every add-on fits in a `u64`

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a base package (e.g. `brand-starter`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

/// Identifier of an add-on (e.g. `seo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddonId(String);

macro_rules! string_id {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }
    };
}

string_id!(PackageId);
string_id!(AddonId);

// ============================================================================
// Entities
// ============================================================================

/// Add-on category. Grouping is cosmetic and never affects pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AddonGroup {
    #[default]
    Frontend,
    Backend,
}

impl AddonGroup {
    /// Section heading used by the configurator screen
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend Modules Upgrade",
            Self::Backend => "Backend Modules Upgrade",
        }
    }

    /// One-line pitch shown under the heading
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Frontend => "Enhance the visual experience and brand identity.",
            Self::Backend => "Strengthen performance, security, and search ranking.",
        }
    }
}

/// A headline feature shown on the package details screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// A base service tier with a fixed starting price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub title: String,
    /// Short description used by the configurator cards
    pub description: String,
    /// Starting price in whole pesos
    pub base_price: u64,
    /// Long-form pitch for the details screen
    #[serde(default)]
    pub overview: String,
    /// Marketing price range, e.g. "₱8,000 – ₱15,000"
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub target_audience: String,
    /// Bullet list for the home screen card
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub specs: Vec<String>,
    /// Flagged as the studio's top pick on the home screen
    #[serde(default)]
    pub top_choice: bool,
}

/// An optional priced enhancement layered on top of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: AddonId,
    pub title: String,
    pub description: String,
    pub price: u64,
    /// Filled in from the enclosing group when loaded from a file
    #[serde(skip)]
    pub group: AddonGroup,
}

/// One declared add-on group with its add-ons in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonGroupEntry {
    pub group: AddonGroup,
    pub addons: Vec<AddOn>,
}

/// Errors raised while building or validating a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog must contain at least one package")]
    Empty,

    #[error("duplicate package id '{0}'")]
    DuplicatePackage(PackageId),

    #[error("duplicate add-on id '{0}' (add-on ids are shared across groups)")]
    DuplicateAddon(AddonId),

    #[error("add-on group '{0}' is declared more than once")]
    DuplicateGroup(AddonGroup),

    #[error("the most expensive package plus every add-on exceeds the representable price range")]
    PriceOverflow,

    #[error("add-on '{addon}' is tagged {tagged} but declared under {declared}")]
    GroupMismatch {
        addon: AddonId,
        tagged: AddonGroup,
        declared: AddonGroup,
    },
}

// ============================================================================
// Catalog
// ============================================================================

/// Immutable, validated catalog of packages and add-ons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    packages: Vec<Package>,
    addon_groups: Vec<AddonGroupEntry>,
}

impl Catalog {
    /// Build a catalog, enforcing the module invariants.
    pub fn new(
        packages: Vec<Package>,
        addon_groups: Vec<AddonGroupEntry>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            packages,
            addon_groups,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the catalog invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.packages.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut package_ids = HashSet::new();
        for package in &self.packages {
            if !package_ids.insert(package.id.as_str()) {
                return Err(CatalogError::DuplicatePackage(package.id.clone()));
            }
        }

        let mut groups = HashSet::new();
        let mut addon_ids = HashSet::new();
        for entry in &self.addon_groups {
            if !groups.insert(entry.group) {
                return Err(CatalogError::DuplicateGroup(entry.group));
            }
            for addon in &entry.addons {
                if addon.group != entry.group {
                    return Err(CatalogError::GroupMismatch {
                        addon: addon.id.clone(),
                        tagged: addon.group,
                        declared: entry.group,
                    });
                }
                if !addon_ids.insert(addon.id.as_str()) {
                    return Err(CatalogError::DuplicateAddon(addon.id.clone()));
                }
            }
        }

        // The largest possible quote must fit, so engine totals never overflow
        let max_base = self.packages.iter().map(|p| p.base_price).max().unwrap_or(0);
        self.addons()
            .try_fold(max_base, |total, addon| total.checked_add(addon.price))
            .ok_or(CatalogError::PriceOverflow)?;

        Ok(())
    }

    /// Packages in display order
    pub fn list_packages(&self) -> &[Package] {
        &self.packages
    }

    /// Add-on groups in display order, each with its add-ons in declaration order
    pub fn list_addon_groups(&self) -> &[AddonGroupEntry] {
        &self.addon_groups
    }

    /// Look up a package by id
    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.id.as_str() == id)
    }

    /// Look up an add-on by id across every group
    pub fn addon(&self, id: &str) -> Option<&AddOn> {
        self.addons().find(|a| a.id.as_str() == id)
    }

    /// All add-ons in catalog declaration order (group by group)
    pub fn addons(&self) -> impl Iterator<Item = &AddOn> {
        self.addon_groups.iter().flat_map(|entry| entry.addons.iter())
    }

    /// The package used when no (valid) initial selection is supplied.
    pub fn first_package(&self) -> &Package {
        // Non-empty is enforced by `validate`
        &self.packages[0]
    }

    /// Built-in studio catalog.
    pub fn builtin() -> Self {
        Self {
            packages: builtin_packages(),
            addon_groups: vec![
                AddonGroupEntry {
                    group: AddonGroup::Frontend,
                    addons: vec![
                        addon(
                            "logo",
                            "Logo & Brand Identity",
                            4500,
                            "Creation of a professional logo, color palette, and basic brand guidelines.",
                            AddonGroup::Frontend,
                        ),
                        addon(
                            "content",
                            "Pro Copywriting (5 Pages)",
                            5000,
                            "Professional writing for your Home, About, and Service pages to convert visitors.",
                            AddonGroup::Frontend,
                        ),
                        addon(
                            "anim",
                            "UI Animation Pack",
                            2500,
                            "Smooth scroll effects, hover states, and micro-interactions for a premium feel.",
                            AddonGroup::Frontend,
                        ),
                    ],
                },
                AddonGroupEntry {
                    group: AddonGroup::Backend,
                    addons: vec![
                        addon(
                            "seo",
                            "Enhanced SEO Setup",
                            3500,
                            "Advanced keyword research, meta tags, and sitemap indexing.",
                            AddonGroup::Backend,
                        ),
                        addon(
                            "deploy",
                            "Deployment & Domain Setup",
                            2000,
                            "Server setup, DNS configuration, and SSL installation.",
                            AddonGroup::Backend,
                        ),
                        addon(
                            "security",
                            "Security Hardening",
                            3000,
                            "Advanced firewall setup, spam protection, and login rate limiting.",
                            AddonGroup::Backend,
                        ),
                    ],
                },
            ],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn addon(id: &str, title: &str, price: u64, description: &str, group: AddonGroup) -> AddOn {
    AddOn {
        id: AddonId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        price,
        group,
    }
}

fn feature(title: &str, description: &str) -> Feature {
    Feature {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_packages() -> Vec<Package> {
    vec![
        Package {
            id: PackageId::from("brand-starter"),
            title: "Brand Starter".to_string(),
            description: "Digital portfolio with gallery & contact form.".to_string(),
            base_price: 8000,
            overview: "The perfect launchpad for small businesses, cafes, and service providers. \
                       We build a professional digital presence that establishes trust and \
                       converts visitors into leads."
                .to_string(),
            price_range: "₱8,000 – ₱15,000".to_string(),
            badge: "Best Value".to_string(),
            target_audience: "Freelancers, Local Cafes, Consultants, Small Clinics".to_string(),
            highlights: strings(&[
                "Single or Multi-page Layout",
                "Responsive Design",
                "Brand Gallery",
                "Business Info Section",
                "Contact Form",
                "Social Media Links",
            ]),
            features: vec![
                feature(
                    "Responsive Architecture",
                    "Flawless rendering on mobile, tablet, and desktop devices.",
                ),
                feature(
                    "Brand Identity Gallery",
                    "High-resolution image showcasing with lightbox integration.",
                ),
                feature(
                    "Lead Generation",
                    "Custom contact forms connected directly to your email.",
                ),
                feature(
                    "Local SEO Basics",
                    "Google Maps integration and basic meta-tagging for local discovery.",
                ),
            ],
            specs: strings(&[
                "1-3 Page Layout",
                "React + Tailwind Stack",
                "SSL Certificate Included",
                "Social Media Integration",
            ]),
            top_choice: true,
        },
        Package {
            id: PackageId::from("product-showcase"),
            title: "Product Showcase".to_string(),
            description: "Catalog with redirect links to Shopee/Lazada.".to_string(),
            base_price: 18000,
            overview: "Designed for retailers who want a branded catalog experience without the \
                       overhead of full e-commerce management. Organize your products and drive \
                       traffic."
                .to_string(),
            price_range: "₱18,000 – ₱30,000".to_string(),
            badge: "Recommended".to_string(),
            target_audience: "Instagram Sellers, Boutiques, Wholesalers, Dropshippers".to_string(),
            highlights: strings(&[
                "Everything in 'Brand Starter'",
                "Product Catalog",
                "Smart Redirect to e-commerce listing",
                "Promotional Banners",
            ]),
            features: vec![
                feature(
                    "Dynamic Product Catalog",
                    "Filterable and searchable product listings with categories.",
                ),
                feature(
                    "Smart Redirects",
                    "Buttons linking directly to Shopee/Lazada/Instagram DM for checkout.",
                ),
                feature(
                    "Promotional Banners",
                    "Announce sales and new arrivals with dedicated ad slots.",
                ),
                feature(
                    "Analytics Integration",
                    "Track which products are getting the most views.",
                ),
            ],
            specs: strings(&[
                "Up to 50 Products",
                "Advanced Filtering",
                "WhatsApp/Messenger Integration",
                "Admin Content Management",
            ]),
            top_choice: false,
        },
        Package {
            id: PackageId::from("full-ecommerce"),
            title: "Full E-Commerce Suite".to_string(),
            description: "Direct sales, inventory, and payment gateways.".to_string(),
            base_price: 40000,
            overview: "Complete autonomy over your sales channel. Manage inventory, process \
                       payments, and own your customer data without paying marketplace \
                       commission fees."
                .to_string(),
            price_range: "₱40,000 – ₱75,000+".to_string(),
            badge: "Enterprise Grade".to_string(),
            target_audience: "Established Brands, D2C Startups, High-Volume Sellers".to_string(),
            highlights: strings(&[
                "Everything in 'Product Showcase'",
                "Integrated Shopping Cart",
                "Payment Gateway Setup",
                "Inventory Management",
                "Customer Accounts",
                "Admin Dashboard",
                "Security & SSL",
            ]),
            features: vec![
                feature(
                    "Integrated Shopping Cart",
                    "Seamless checkout flow with guest and user account options.",
                ),
                feature(
                    "Payment Gateways",
                    "Accept GCash, Maya, Cards, and COD securely.",
                ),
                feature(
                    "Inventory Management",
                    "Real-time stock tracking and low-stock alerts.",
                ),
                feature(
                    "Admin Dashboard",
                    "Full control panel to manage orders, customers, and content.",
                ),
            ],
            specs: strings(&[
                "Unlimited Products",
                "Customer Accounts",
                "Automated Emails",
                "Advanced SEO Suite",
            ]),
            top_choice: false,
        },
    ]
}
