//! Order review overlay drawn over the configurator

use super::format::{format_addon_price, format_price};
use crate::components::help_overlay::centered_rect;
use crate::engine::ConfigurationEngine;
use crate::theme::{Styles, UiText};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_review(f: &mut Frame, engine: &ConfigurationEngine, parent: Rect) {
    let lines = if engine.review().is_submitted() {
        submitted_lines(engine)
    } else {
        review_lines(engine)
    };

    let area = centered_rect(parent, 50, lines.len() as u16 + 2, 48, 72);
    f.render_widget(Clear, area);

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", engine.review().state().description()))
                .border_style(Styles::border_active())
                .style(Styles::panel_bg_alt()),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(dialog, area);
}

/// Line items as they stand right now; edits behind the dialog show up live.
fn review_lines(engine: &ConfigurationEngine) -> Vec<Line<'static>> {
    let package = engine.active_package();
    let mut lines = vec![
        Line::from(Span::styled("Review your order", Styles::title())),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:<30}", package.title), Styles::text()),
            Span::styled(format_price(package.base_price), Styles::price()),
        ]),
    ];

    let addons = engine.active_addons();
    if addons.is_empty() {
        lines.push(Line::from(Span::styled(UiText::NO_ADDONS, Styles::text_muted())));
    }
    for addon in addons {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<30}", addon.title), Styles::text_secondary()),
            Span::styled(format_addon_price(addon.price), Styles::success()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<30}", "Total estimate"), Styles::text()),
        Span::styled(format_price(engine.grand_total()), Styles::total()),
    ]));
    if let Some(reference) = engine.review().order_reference() {
        lines.push(Line::from(vec![
            Span::styled("Reference ", Styles::text_muted()),
            Span::styled(reference.to_string(), Styles::badge()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(UiText::BTN_PLACE_ORDER, Styles::button_active()),
        Span::raw("  "),
        Span::styled(UiText::BTN_CLOSE, Styles::button_inactive()),
    ]));
    lines
}

fn submitted_lines(engine: &ConfigurationEngine) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("✓", Styles::selected())).alignment(Alignment::Center),
        Line::from(Span::styled(UiText::ORDER_PLACED, Styles::selected()))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(UiText::ORDER_PLACED_NOTE, Styles::text_secondary())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total estimate  ", Styles::text()),
            Span::styled(format_price(engine.grand_total()), Styles::total()),
        ]),
    ];
    if let Some(reference) = engine.review().order_reference() {
        lines.push(Line::from(vec![
            Span::styled("Reference       ", Styles::text_muted()),
            Span::styled(reference.to_string(), Styles::badge()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(UiText::BTN_CLOSE, Styles::button_active()))
            .alignment(Alignment::Center),
    );
    lines
}
