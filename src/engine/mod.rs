//! Engine modules: selection, pricing, and review state for the configurator.
//!
//! The engine layer sits between the catalog (what the studio sells) and the
//! screens (what the visitor sees). It owns no I/O and performs no navigation;
//! every screen polls it after each mutating call.

pub mod configurator;
pub mod quote;

pub use configurator::{
    AddonGroupView, AddonRow, Configuration, ConfigurationEngine, NavigationRequest,
    SelectionError,
};
pub use quote::{QuoteLine, QuoteSummary};
