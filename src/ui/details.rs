//! Package details screen

use super::header::{split_header, HeaderRenderer};
use crate::catalog::Package;
use crate::theme::Styles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_details(
    f: &mut Frame,
    package: &Package,
    scroll: u16,
    area: Rect,
    header: &HeaderRenderer,
) {
    let (header_area, body) = split_header(area);
    header.render_header(f, header_area, Some("Package Details"));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(body);

    header.render_title(f, chunks[0], &package.title);

    let content = Paragraph::new(detail_lines(package))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive()),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(content, chunks[1]);
}

fn section(lines: &mut Vec<Line<'static>>, heading: &str) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(heading.to_uppercase(), Styles::label())));
}

fn detail_lines(package: &Package) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if !package.badge.is_empty() {
        lines.push(Line::from(Span::styled(package.badge.clone(), Styles::badge())));
    }
    let overview = if package.overview.is_empty() {
        &package.description
    } else {
        &package.overview
    };
    lines.push(Line::from(Span::styled(overview.clone(), Styles::text_secondary())));

    section(&mut lines, "Estimated investment");
    lines.push(Line::from(vec![
        Span::styled(
            if package.price_range.is_empty() {
                super::format_price(package.base_price)
            } else {
                package.price_range.clone()
            },
            Styles::total(),
        ),
        Span::styled(
            format!("  (starts at {})", super::format_price(package.base_price)),
            Styles::text_muted(),
        ),
    ]));

    if !package.target_audience.is_empty() {
        section(&mut lines, "Ideal for");
        lines.push(Line::from(Span::styled(
            package.target_audience.clone(),
            Styles::text(),
        )));
    }

    if !package.features.is_empty() {
        section(&mut lines, "Key features");
        for feature in &package.features {
            lines.push(Line::from(vec![
                Span::styled("• ", Styles::price()),
                Span::styled(feature.title.clone(), Styles::text()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", feature.description),
                Styles::text_muted(),
            )));
        }
    }

    if !package.specs.is_empty() {
        section(&mut lines, "Technical specs");
        for spec in &package.specs {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Styles::success()),
                Span::styled(spec.clone(), Styles::text_secondary()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ Configure this package → ]",
        Styles::button_active(),
    )));
    lines
}
