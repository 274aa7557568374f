//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Banner, title, and navigation bar rendering
//! - `screens` - Overview screen (selected wires + fill summary)
//! - `dialogs` - Wire picker, size picker, confirmation, help overlay

mod dialogs;
mod header;
mod screens;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

// Re-export for external use
pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to
/// specialized submodules for different parts of the UI.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        // Create main layout with nav bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        // The overview is always the backdrop; dialogs render on top of it
        screens::render_overview_in_area(f, state, content_area, &self.header);

        match state.mode {
            AppMode::Overview => {}
            AppMode::WirePicker => {
                dialogs::render_wire_picker(f, state);
            }
            AppMode::SizePicker => {
                dialogs::render_size_picker(f, state);
            }
            AppMode::ConfirmReset => {
                dialogs::render_confirm_reset(f, state);
            }
        }

        // Render navigation bar
        header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);

        // Render help overlay if visible (on top of everything)
        if state.help_visible {
            dialogs::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
