//! Header and common widget rendering
//!
//! This module contains the ASCII art header, title rendering,
//! and the navigation bar.

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::theme::Colors;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the ASCII art header
pub struct HeaderRenderer {
    /// ASCII art header lines
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the ASCII art header
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    /// Create the ASCII art header
    fn create_header() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                " ██████  ██████  ███    ██ ██████  ██    ██ ██ ████████",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "██      ██    ██ ████   ██ ██   ██ ██    ██ ██    ██   ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "██      ██    ██ ██ ██  ██ ██   ██ ██    ██ ██    ██   ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "██      ██    ██ ██  ██ ██ ██   ██ ██    ██ ██    ██   ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                " ██████  ██████  ██   ████ ██████   ██████  ██    ██   ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "F I L L   C A L C U L A T O R",
                Style::default().fg(Colors::SECONDARY),
            )]),
        ]
    }
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans: Vec<Span> = Vec::new();
    for (key, description) in keybinding_ctx.nav_items(&state.mode) {
        if !spans.is_empty() {
            spans.push(Span::styled("  │  ", Style::default().fg(Colors::FG_MUTED)));
        }
        spans.push(Span::styled(key, Style::default().fg(Colors::SECONDARY)));
        spans.push(Span::styled(
            format!(" {}", description),
            Style::default().fg(Colors::FG_SECONDARY),
        ));
    }

    let nav_bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(nav_bar, area);
}
