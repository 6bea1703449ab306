//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Brand header, titles, nav bar, help overlay
//! - `home` - Landing page with the package cards
//! - `details` - Long-form package page
//! - `configurator` - Package + add-on selection with the live summary
//! - `review` - Order review / confirmation overlay
//! - `format` - Currency formatting

mod configurator;
mod details;
pub mod format;
mod header;
mod home;
mod review;

pub use format::{format_addon_price, format_price};
pub use header::HeaderRenderer;

use crate::app::{AppState, Screen};
use crate::components::keybindings::KeybindingContext;
use crate::theme::Styles;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to the
/// screen submodules.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI for the current state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        f.render_widget(Block::default().style(Styles::panel_bg()), f.area());

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        match &state.screen {
            Screen::Home => home::render_home(f, state, content_area, &self.header),
            Screen::Details { scroll, .. } => {
                if let Some(package) = state.details_package() {
                    details::render_details(f, package, *scroll, content_area, &self.header);
                }
            }
            Screen::Configurator { engine, cursor } => {
                configurator::render_configurator(f, state, engine, *cursor, content_area, &self.header);
                if engine.review().is_open() {
                    review::render_review(f, engine, content_area);
                }
            }
        }

        header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);

        // Help overlay goes on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
