//! Overview screen rendering
//!
//! The overview shows the selected wires with their quantities on the left
//! and a summary panel (conduit size, areas, computed fill percentage) on
//! the right.

use super::header::HeaderRenderer;
use crate::app::AppState;
use crate::fill;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the overview screen in the specified area
pub fn render_overview_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status line
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Conduit Fill Calculator");

    // Split content into selected-wire list and summary
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    render_selected_wires(f, state, content_chunks[0]);
    render_summary(f, state, content_chunks[1]);

    // Status line
    let status = Paragraph::new(state.status_message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Colors::FG_SECONDARY));
    f.render_widget(status, chunks[3]);
}

/// Render the selected-wire list with quantities
fn render_selected_wires(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Selected Wires ")
        .title_style(Styles::title())
        .border_style(Style::default().fg(Colors::PRIMARY));

    if state.selection.is_empty() {
        let placeholder = Paragraph::new("\nNo wires selected.\n\nPress 'A' to add wires.")
            .block(block)
            .alignment(Alignment::Center)
            .style(Styles::hint())
            .wrap(Wrap { trim: true });
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state
        .selection
        .iter()
        .enumerate()
        .map(|(index, (wire_id, quantity))| {
            let style = if index == state.overview_selection {
                Styles::selected()
            } else {
                Styles::unselected()
            };
            let prefix = if index == state.overview_selection {
                "▸ "
            } else {
                "  "
            };

            // Resolve against the catalog for the display label; a stale id
            // renders as unknown but still contributes zero to the fill
            let label = match state.catalog.find_wire(wire_id) {
                Some(wire) => {
                    format!("{} - {} in", wire.wire_type, wire.outer_diameter_in)
                }
                None => format!("{} (unknown wire)", wire_id),
            };

            ListItem::new(format!("{}{}  ×{}", prefix, label, quantity)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(Style::default().bg(Colors::BG_PRIMARY));
    f.render_widget(list, area);
}

/// Render the summary panel: conduit size, areas, and fill percentage
fn render_summary(f: &mut Frame, state: &AppState, area: Rect) {
    let conduit_diameter = state.conduit_size.internal_diameter_in();
    let conduit_area = fill::circle_area(conduit_diameter);

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Conduit:     ", Style::default().fg(Colors::FG_SECONDARY)),
            Span::styled(
                state.conduit_size.label(),
                Style::default()
                    .fg(Colors::FG_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Internal ⌀:  ", Style::default().fg(Colors::FG_SECONDARY)),
            Span::styled(
                format!("{:.3} in", conduit_diameter),
                Style::default().fg(Colors::FG_PRIMARY),
            ),
        ]),
        Line::from(vec![
            Span::styled("Area:        ", Style::default().fg(Colors::FG_SECONDARY)),
            Span::styled(
                format!("{:.4} in²", conduit_area),
                Style::default().fg(Colors::FG_PRIMARY),
            ),
        ]),
        Line::from(vec![
            Span::styled("Wires:       ", Style::default().fg(Colors::FG_SECONDARY)),
            Span::styled(
                format!("{}", state.selection.len()),
                Style::default().fg(Colors::FG_PRIMARY),
            ),
        ]),
        Line::from(""),
    ];

    match state.fill_result {
        Some(percent) => {
            lines.push(Line::from(vec![
                Span::styled("Space used:  ", Style::default().fg(Colors::FG_SECONDARY)),
                Span::styled(format!("{:.2}%", percent), Styles::fill_result(percent)),
            ]));
            if percent > 100.0 {
                lines.push(Line::from(vec![Span::styled(
                    "Selection exceeds the conduit cross-section",
                    Style::default().fg(Colors::ERROR),
                )]));
            }
        }
        None => {
            lines.push(Line::from(vec![Span::styled(
                "Space used:  --",
                Styles::hint(),
            )]));
        }
    }

    let summary = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Fill ")
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .style(Style::default().bg(Colors::BG_PRIMARY))
        .wrap(Wrap { trim: false });

    f.render_widget(summary, area);
}
