//! Home screen: hero copy and one card per package

use super::header::{split_header, HeaderRenderer};
use crate::app::AppState;
use crate::catalog::Package;
use crate::theme::{Styles, UiText};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_home(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let (header_area, body) = split_header(area);
    header.render_header(f, header_area, None);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Hero
            Constraint::Min(8),    // Package cards
            Constraint::Length(2), // Status + footer
        ])
        .split(body);

    render_hero(f, chunks[0]);

    let packages = state.catalog().list_packages();
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            packages
                .iter()
                .map(|_| Constraint::Ratio(1, packages.len() as u32))
                .collect::<Vec<_>>(),
        )
        .split(chunks[1]);

    for (idx, (package, card_area)) in packages.iter().zip(card_areas.iter()).enumerate() {
        render_card(f, package, idx == state.home_selection, *card_area);
    }

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(state.status_message.clone(), Styles::text_secondary())),
        Line::from(Span::styled(UiText::FOOTER, Styles::text_muted())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}

fn render_hero(f: &mut Frame, area: Rect) {
    let hero = Paragraph::new(vec![
        Line::from(Span::styled("Choose Your Package", Styles::title())),
        Line::from(Span::styled(
            "Transparent pricing. Pick a starting point, then tailor it in the configurator.",
            Styles::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(hero, area);
}

fn render_card(f: &mut Frame, package: &Package, highlighted: bool, area: Rect) {
    let mut lines = Vec::new();

    if package.top_choice {
        lines.push(Line::from(Span::styled("★ Top Choice", Styles::badge())));
    } else if !package.badge.is_empty() {
        lines.push(Line::from(Span::styled(package.badge.clone(), Styles::badge())));
    }

    let price = if package.price_range.is_empty() {
        format!("from {}", super::format_price(package.base_price))
    } else {
        package.price_range.clone()
    };
    lines.push(Line::from(Span::styled(price, Styles::price())));
    lines.push(Line::from(Span::styled(package.description.clone(), Styles::text_secondary())));
    lines.push(Line::from(""));

    for highlight in &package.highlights {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Styles::success()),
            Span::styled(highlight.clone(), Styles::text()),
        ]));
    }

    lines.push(Line::from(""));
    let (configure, details) = if highlighted {
        (Styles::button_active(), Styles::button_inactive())
    } else {
        (Styles::text_muted(), Styles::text_muted())
    };
    lines.push(Line::from(vec![
        Span::styled("[ Configure ]", configure),
        Span::raw(" "),
        Span::styled("[ Details ]", details),
    ]));

    let border = if highlighted {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };
    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", package.title), Styles::title()))
                .border_style(border),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}
