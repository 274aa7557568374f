//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and visual constants used
//! throughout the application, rather than hardcoding them in components.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for most panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Alternative dark background - used for contrast areas
    pub const BG_SECONDARY: Color = Color::Rgb(30, 30, 40);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors (branding, emphasis)
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback (fill creeping up)
    pub const WARNING: Color = Color::Yellow;

    /// Error/danger feedback (over-fill)
    pub const ERROR: Color = Color::Red;

    /// Informational feedback
    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Manufacturer group header in the wire picker
    pub const GROUP_HEADER: Color = Color::Magenta;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Commonly used style combinations
pub struct Styles;

impl Styles {
    /// Style for screen and dialog titles
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the cursor row in a list
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected list rows
    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Style for manufacturer group headers in the wire picker
    pub fn group_header() -> Style {
        Style::default()
            .fg(Colors::GROUP_HEADER)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for hint/instruction text
    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Style for the computed fill percentage, colored by severity.
    ///
    /// The thresholds are purely visual cues; no code limit is enforced.
    pub fn fill_result(percent: f64) -> Style {
        let color = if percent > 100.0 {
            Colors::ERROR
        } else if percent > 60.0 {
            Colors::WARNING
        } else {
            Colors::SUCCESS
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_result_severity_colors() {
        assert_eq!(Styles::fill_result(8.18).fg, Some(Colors::SUCCESS));
        assert_eq!(Styles::fill_result(73.64).fg, Some(Colors::WARNING));
        assert_eq!(Styles::fill_result(140.0).fg, Some(Colors::ERROR));
    }
}
