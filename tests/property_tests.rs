//! Property-Based Tests for Hotfixers
//!
//! Uses proptest to drive the Configuration Engine with arbitrary intent
//! sequences.
//!
//! These tests verify:
//! - Toggle involution
//! - Additive pricing
//! - Catalog-ordered active add-ons
//! - Review state machine closure
//! - Price formatting shape

use hotfixers::catalog::Catalog;
use hotfixers::engine::ConfigurationEngine;
use hotfixers::format_price;
use hotfixers::review::ReviewState;
use proptest::prelude::*;
use std::sync::Arc;

const PACKAGES: [&str; 3] = ["brand-starter", "product-showcase", "full-ecommerce"];
const ADDONS: [&str; 6] = ["logo", "content", "anim", "seo", "deploy", "security"];

fn engine() -> ConfigurationEngine {
    ConfigurationEngine::new(Arc::new(Catalog::builtin()), None)
}

/// One visitor intent
#[derive(Debug, Clone)]
enum Intent {
    SelectPackage(usize),
    ToggleAddon(usize),
    OpenReview,
    SubmitReview,
    CloseReview,
}

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        (0..PACKAGES.len()).prop_map(Intent::SelectPackage),
        (0..ADDONS.len()).prop_map(Intent::ToggleAddon),
        Just(Intent::OpenReview),
        Just(Intent::SubmitReview),
        Just(Intent::CloseReview),
    ]
}

fn apply(engine: &mut ConfigurationEngine, intent: &Intent) {
    match intent {
        Intent::SelectPackage(i) => engine.select_package(PACKAGES[*i]).unwrap(),
        Intent::ToggleAddon(i) => {
            engine.toggle_addon(ADDONS[*i]).unwrap();
        }
        Intent::OpenReview => engine.open_review(),
        // Rejected while closed; the state must not change either way
        Intent::SubmitReview => {
            let _ = engine.submit_review();
        }
        Intent::CloseReview => engine.close_review(),
    }
}

proptest! {
    /// Toggling the same add-on twice restores the add-on set
    #[test]
    fn toggle_is_involution(
        intents in prop::collection::vec(intent_strategy(), 0..20),
        addon in 0..ADDONS.len(),
    ) {
        let mut engine = engine();
        for intent in &intents {
            apply(&mut engine, intent);
        }
        let before = engine.configuration().clone();
        engine.toggle_addon(ADDONS[addon]).unwrap();
        engine.toggle_addon(ADDONS[addon]).unwrap();
        prop_assert_eq!(engine.configuration(), &before);
    }

    /// Grand total is base price plus the sum of the selected add-on prices
    #[test]
    fn pricing_is_additive(intents in prop::collection::vec(intent_strategy(), 0..30)) {
        let mut engine = engine();
        for intent in &intents {
            apply(&mut engine, intent);
        }

        let catalog = Catalog::builtin();
        let expected_addons: u64 = engine
            .configuration()
            .selected_addons()
            .iter()
            .map(|id| catalog.addon(id.as_str()).unwrap().price)
            .sum();
        let base = catalog
            .package(engine.configuration().selected_package().as_str())
            .unwrap()
            .base_price;

        prop_assert_eq!(engine.addons_total(), expected_addons);
        prop_assert_eq!(engine.grand_total(), base + expected_addons);
    }

    /// Active add-ons always come back in catalog declaration order
    #[test]
    fn active_addons_follow_catalog_order(
        toggles in prop::collection::vec(0..ADDONS.len(), 0..20),
    ) {
        let mut engine = engine();
        for i in &toggles {
            engine.toggle_addon(ADDONS[*i]).unwrap();
        }
        let positions: Vec<usize> = engine
            .active_addons()
            .iter()
            .map(|a| ADDONS.iter().position(|id| *id == a.id.as_str()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(positions, sorted);
    }

    /// Exactly one package is always selected and it resolves
    #[test]
    fn one_package_always_selected(intents in prop::collection::vec(intent_strategy(), 0..30)) {
        let mut engine = engine();
        for intent in &intents {
            apply(&mut engine, intent);
        }
        let selected = PACKAGES
            .iter()
            .filter(|id| engine.is_package_selected(id))
            .count();
        prop_assert_eq!(selected, 1);
        prop_assert!(engine.is_package_selected(engine.active_package().id.as_str()));
    }

    /// Close leaves the review closed and unsubmitted from any state
    #[test]
    fn close_resets_from_any_state(intents in prop::collection::vec(intent_strategy(), 0..30)) {
        let mut engine = engine();
        for intent in &intents {
            apply(&mut engine, intent);
        }
        engine.close_review();
        prop_assert_eq!(engine.review().state(), ReviewState::Closed);
        prop_assert!(!engine.review().is_submitted());
    }

    /// Submitted always implies open
    #[test]
    fn submitted_implies_open(intents in prop::collection::vec(intent_strategy(), 0..30)) {
        let mut engine = engine();
        for intent in &intents {
            apply(&mut engine, intent);
            if engine.review().is_submitted() {
                prop_assert!(engine.review().is_open());
            }
        }
    }

    /// Formatted prices keep every digit and group by thousands
    #[test]
    fn format_price_keeps_digits(amount in 0u64..10_000_000_000) {
        let formatted = format_price(amount);
        prop_assert!(formatted.starts_with('₱'));
        let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(digits, amount.to_string());
        for group in formatted.trim_start_matches('₱').split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }
}
