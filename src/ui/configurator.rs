//! Configurator screen: package + add-on selection with a live summary

use super::format::{format_addon_price, format_price};
use super::header::{split_header, HeaderRenderer};
use crate::app::AppState;
use crate::engine::ConfigurationEngine;
use crate::theme::{Styles, UiText};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_configurator(
    f: &mut Frame,
    state: &AppState,
    engine: &ConfigurationEngine,
    cursor: usize,
    area: Rect,
    header: &HeaderRenderer,
) {
    let (header_area, body) = split_header(area);
    header.render_header(f, header_area, Some("Configure"));

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(body);

    render_selection(f, engine, cursor, columns[0]);
    render_summary(f, state, engine, columns[1]);
}

/// Left column. Row order must match `AppState::configurator_rows`.
fn render_selection(f: &mut Frame, engine: &ConfigurationEngine, cursor: usize, area: Rect) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor_line = 0usize;
    let mut row = 0usize;

    let row_style = |row: usize, base: Style| {
        if row == cursor {
            base.patch(Styles::cursor())
        } else {
            base
        }
    };

    lines.push(Line::from(Span::styled("STEP 1  Choose your package", Styles::label())));
    for package in engine.catalog().list_packages() {
        let selected = engine.is_package_selected(package.id.as_str());
        let (marker, style) = if selected {
            ("(●) ", Styles::selected())
        } else {
            ("( ) ", Styles::unselected())
        };
        if row == cursor {
            cursor_line = lines.len();
        }
        lines.push(Line::from(vec![
            Span::styled(marker, row_style(row, style)),
            Span::styled(format!("{:<28}", package.title), row_style(row, Styles::text())),
            Span::styled(format_price(package.base_price), row_style(row, Styles::price())),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", package.description),
            Styles::text_muted(),
        )));
        row += 1;
    }

    for (step, view) in engine.addon_rows().iter().enumerate() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("STEP {}  {}", step + 2, view.group.heading()),
            Styles::label(),
        )));
        lines.push(Line::from(Span::styled(view.group.tagline(), Styles::text_muted())));

        for addon_row in &view.rows {
            let (marker, style) = if addon_row.selected {
                ("[x] ", Styles::selected())
            } else {
                ("[ ] ", Styles::unselected())
            };
            if row == cursor {
                cursor_line = lines.len();
            }
            lines.push(Line::from(vec![
                Span::styled(marker, row_style(row, style)),
                Span::styled(
                    format!("{:<28}", addon_row.addon.title),
                    row_style(row, Styles::text()),
                ),
                Span::styled(format_addon_price(addon_row.addon.price), row_style(row, style)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", addon_row.addon.description),
                Styles::text_muted(),
            )));
            row += 1;
        }
    }

    lines.push(Line::from(""));
    if row == cursor {
        cursor_line = lines.len();
    }
    let button = if row == cursor {
        Styles::button_active()
    } else {
        Styles::button_inactive()
    };
    lines.push(Line::from(Span::styled(UiText::BTN_REVIEW, button)));

    // Keep the cursor row inside the viewport
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = (cursor_line + 2).saturating_sub(visible);

    let list = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Build your website ")
                .border_style(Styles::border_active()),
        )
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(list, area);
}

fn render_summary(f: &mut Frame, state: &AppState, engine: &ConfigurationEngine, area: Rect) {
    let package = engine.active_package();
    let mut lines = vec![
        Line::from(Span::styled("BASE", Styles::label())),
        Line::from(vec![
            Span::styled(format!("{:<24}", package.title), Styles::text()),
            Span::styled(format_price(package.base_price), Styles::price()),
        ]),
        Line::from(""),
        Line::from(Span::styled("ADD-ONS", Styles::label())),
    ];

    let addons = engine.active_addons();
    if addons.is_empty() {
        lines.push(Line::from(Span::styled(UiText::NO_ADDONS, Styles::text_muted())));
    } else {
        for addon in addons {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<24}", addon.title), Styles::text_secondary()),
                Span::styled(format_addon_price(addon.price), Styles::success()),
            ]));
        }
    }

    lines.extend([
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:<24}", "Total estimate"), Styles::text()),
            Span::styled(format_price(engine.grand_total()), Styles::total()),
        ]),
        Line::from(""),
        Line::from(Span::styled(UiText::ESTIMATE_NOTE, Styles::text_muted())),
        Line::from(""),
        Line::from(Span::styled(state.status_message.clone(), Styles::text_secondary())),
    ]);

    let summary = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your configuration ")
                .border_style(Styles::border_inactive())
                .style(Styles::panel_bg_alt()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(summary, area);
}
