//! Dialog rendering module
//!
//! This module handles rendering of all dialogs: the wire picker, the
//! conduit size picker, the reset confirmation, and the help overlay.

use crate::app::{AppState, PickerRow};
use crate::components::keybindings::KeybindingContext;
use crate::conduit::TradeSize;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

/// Compute a centered dialog rectangle as a fraction of the frame
fn centered_rect(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let dialog_width = (area.width * width_percent / 100).min(area.width);
    let dialog_height = (area.height * height_percent / 100).min(area.height);
    let dialog_x = (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = (area.height.saturating_sub(dialog_height)) / 2;
    Rect::new(dialog_x, dialog_y, dialog_width, dialog_height)
}

/// Render the wire picker dialog: the catalog grouped by manufacturer
pub fn render_wire_picker(f: &mut Frame, state: &AppState) {
    let dialog_rect = centered_rect(f.area(), 75, 75);
    f.render_widget(Clear, dialog_rect);

    let rows = state.picker_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| match row {
            PickerRow::Manufacturer(m_idx) => {
                let name = &state.catalog.manufacturers()[*m_idx].name;
                ListItem::new(format!(" {} ", name)).style(Styles::group_header())
            }
            PickerRow::Wire { manufacturer, wire } => {
                let w = &state.catalog.manufacturers()[*manufacturer].wires[*wire];
                let selected = state.selection.contains(&w.id);
                let quantity = state.selection.quantity(&w.id);

                let checkbox = if selected { "[x]" } else { "[ ]" };
                let quantity_note = if selected {
                    format!("  ×{}", quantity)
                } else {
                    String::new()
                };
                let text = format!(
                    "  {} {} - {} in{}",
                    checkbox, w.wire_type, w.outer_diameter_in, quantity_note
                );

                let style = if index == state.picker_selection {
                    Styles::selected()
                } else if selected {
                    Style::default().fg(Colors::SUCCESS)
                } else {
                    Styles::unselected()
                };
                ListItem::new(text).style(style)
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select Wires ")
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
        )
        .style(Style::default().bg(Colors::BG_SECONDARY));

    f.render_widget(list, dialog_rect);

    // Hint line inside the bottom border area
    let hint_rect = Rect::new(
        dialog_rect.x + 2,
        dialog_rect.y + dialog_rect.height.saturating_sub(2),
        dialog_rect.width.saturating_sub(4),
        1,
    );
    let hint = Paragraph::new("Space select · +/- quantity · Enter done")
        .alignment(Alignment::Center)
        .style(Styles::hint());
    f.render_widget(hint, hint_rect);
}

/// Render the conduit size picker dialog
pub fn render_size_picker(f: &mut Frame, state: &AppState) {
    let dialog_rect = centered_rect(f.area(), 40, 55);
    f.render_widget(Clear, dialog_rect);

    let items: Vec<ListItem> = TradeSize::iter()
        .enumerate()
        .map(|(index, size)| {
            let current = size == state.conduit_size;
            let marker = if current { "●" } else { " " };
            let text = format!(
                " {} {:<10} {:.3} in",
                marker,
                size.label(),
                size.internal_diameter_in()
            );
            let style = if index == state.size_selection {
                Styles::selected()
            } else if current {
                Style::default().fg(Colors::SUCCESS)
            } else {
                Styles::unselected()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Conduit Size ")
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
        )
        .style(Style::default().bg(Colors::BG_SECONDARY));

    f.render_widget(list, dialog_rect);
}

/// Render the reset confirmation dialog
pub fn render_confirm_reset(f: &mut Frame, state: &AppState) {
    let dialog_rect = centered_rect(f.area(), 50, 25);
    f.render_widget(Clear, dialog_rect);

    let lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            format!(
                "Clear all {} selected wire(s)?",
                state.selection.len()
            ),
            Style::default()
                .fg(Colors::FG_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Colors::ERROR)),
            Span::styled(" Reset    ", Style::default().fg(Colors::FG_SECONDARY)),
            Span::styled("[N]", Style::default().fg(Colors::SUCCESS)),
            Span::styled(" Keep", Style::default().fg(Colors::FG_SECONDARY)),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Reset Selections ")
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::ERROR)),
        )
        .alignment(Alignment::Center)
        .style(Style::default().bg(Colors::BG_SECONDARY));

    f.render_widget(dialog, dialog_rect);
}

/// Render the help overlay on top of everything
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let dialog_rect = centered_rect(f.area(), 55, 65);
    f.render_widget(Clear, dialog_rect);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![Span::styled(
            "  Conduit Fill Calculator Help  ",
            Styles::title(),
        )]),
        Line::from(""),
    ];

    for section in keybinding_ctx.help_content(&state.mode) {
        lines.push(Line::from(vec![Span::styled(
            format!("  {}  ", section.title),
            Style::default()
                .fg(Colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));
        for (key, description) in &section.items {
            lines.push(Line::from(vec![
                Span::styled("    ", Style::default()),
                Span::styled(
                    format!("{:<10}", key),
                    Style::default()
                        .fg(Colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(description.clone(), Style::default().fg(Colors::FG_PRIMARY)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![Span::styled(
        "Press ? or Esc to close",
        Styles::hint(),
    )]));

    let overlay = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
        )
        .style(Style::default().bg(Colors::BG_SECONDARY));

    f.render_widget(overlay, dialog_rect);
}
