//! Header and common widget rendering
//!
//! This module contains the brand header, title rendering, the nav bar and
//! the help overlay entry points.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Colors, Styles, UiText};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer holding the brand banner
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Height of the banner in rows
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the banner with a page name, e.g. "Hotfixers / Configure"
    pub fn render_header(&self, f: &mut Frame, area: Rect, page: Option<&str>) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut lines = self.header_lines.clone();
        if let Some(page) = page {
            if let Some(first) = lines.first_mut() {
                first.spans.push(Span::styled(format!(" / {}", page), Styles::price()));
            }
        }

        let header = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Styles::border_inactive()),
            )
            .alignment(Alignment::Left);
        f.render_widget(header, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL).border_style(Styles::border_active()))
            .alignment(Alignment::Center)
            .style(Styles::title());
        f.render_widget(title_widget, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(" </> ", Style::default().fg(Colors::PRIMARY)),
                Span::styled(UiText::STUDIO, Styles::total()),
            ]),
            Line::from(Span::styled(
                "     Websites for small businesses, built to convert.",
                Styles::text_muted(),
            )),
        ]
    }
}

/// Split an area into banner + body
pub fn split_header(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HeaderRenderer::HEIGHT), Constraint::Min(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode());
    let nav_bar = NavBar::new(nav_items);
    nav_bar.render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode(), keybinding_ctx);
    help_overlay.render(f, f.area());
}
