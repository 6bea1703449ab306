//! Rendering tests against ratatui's TestBackend
//!
//! Each test drives the app into a screen and checks the drawn buffer for the
//! text a visitor would read.

use hotfixers::app::AppState;
use hotfixers::catalog::{Catalog, PackageId};
use hotfixers::components::keybindings::{KeyAction, KeybindingContext};
use hotfixers::engine::NavigationRequest;
use hotfixers::ui::UiRenderer;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

fn render(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 60)).unwrap();
    let renderer = UiRenderer::new();
    let ctx = KeybindingContext::new();
    terminal
        .draw(|f| renderer.render(f, state, &ctx))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn state(start: NavigationRequest) -> AppState {
    AppState::new(Arc::new(Catalog::builtin()), start)
}

#[test]
fn test_home_shows_every_package() {
    let screen = render(&state(NavigationRequest::Home));
    assert!(screen.contains("Brand Starter"));
    assert!(screen.contains("Product Showcase"));
    assert!(screen.contains("Full E-Commerce Suite"));
    assert!(screen.contains("Top Choice"));
}

#[test]
fn test_details_shows_specs() {
    let screen = render(&state(NavigationRequest::Details {
        package: PackageId::from("product-showcase"),
    }));
    assert!(screen.contains("Product Showcase"));
    assert!(screen.contains("TECHNICAL SPECS"));
    assert!(screen.contains("Up to 50 Products"));
}

#[test]
fn test_configurator_summary_tracks_selection() {
    let mut state = state(NavigationRequest::Configure { package: None });
    let screen = render(&state);
    assert!(screen.contains("No add-ons selected"));
    assert!(screen.contains("₱8,000"));

    // Rows: 3 packages, then logo, content, anim, seo
    for _ in 0..6 {
        state.apply(KeyAction::NavigateDown).unwrap();
    }
    state.apply(KeyAction::Select).unwrap();
    let screen = render(&state);
    assert!(screen.contains("Enhanced SEO Setup"));
    assert!(screen.contains("₱11,500"));
    assert!(!screen.contains("No add-ons selected"));
}

#[test]
fn test_review_overlay_and_confirmation() {
    let mut state = state(NavigationRequest::Configure { package: None });
    state.apply(KeyAction::Review).unwrap();
    let screen = render(&state);
    assert!(screen.contains("Review your order"));
    assert!(screen.contains("HF-"));

    state.apply(KeyAction::Submit).unwrap();
    let screen = render(&state);
    assert!(screen.contains("Order received!"));
}

#[test]
fn test_help_overlay_renders() {
    let mut state = state(NavigationRequest::Home);
    state.apply(KeyAction::Help).unwrap();
    let screen = render(&state);
    assert!(screen.contains("Help"));
    assert!(screen.contains("Press ? or Esc to close"));
}
