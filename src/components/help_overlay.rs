//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating panel.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles, UiText};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections, mode),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], mode: &AppMode) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled(format!("  {} Help  ", UiText::STUDIO), Styles::title())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Current: ", Styles::text_muted()),
                Span::styled(mode.to_string(), Styles::badge()),
            ]),
            Line::from(""),
        ];

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<10}", key), Styles::title()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Styles::text_muted(),
        )));
        lines
    }

    /// Number of content lines (used for sizing)
    pub fn height(&self) -> u16 {
        self.content.len() as u16 + 2
    }

    /// Render the help overlay centered on `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(parent, 60, self.height(), 44, 80);
        f.render_widget(Clear, area);
        let panel = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Styles::border_active())
                    .style(Styles::panel_bg_alt()),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(panel, area);
    }
}

/// Compute a centered rectangle: `width_percent` of the parent clamped to
/// `[min_width, max_width]`, and `height` rows clamped to the parent.
pub fn centered_rect(
    parent: Rect,
    width_percent: u16,
    height: u16,
    min_width: u16,
    max_width: u16,
) -> Rect {
    let scaled = u32::from(parent.width) * u32::from(width_percent) / 100;
    let width = (scaled as u16)
        .clamp(min_width, max_width)
        .min(parent.width);
    let height = height.min(parent.height);
    Rect::new(
        parent.x + (parent.width - width) / 2,
        parent.y + (parent.height - height) / 2,
        width,
        height,
    )
}
