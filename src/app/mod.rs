//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, PickerRow)
//! - Main module - App struct and event loop
//!
//! The application is single-threaded and synchronous: state is mutated
//! only in response to discrete key events, and the fill percentage is
//! recomputed deterministically after every change.

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, PickerRow};

use crate::catalog::Catalog;
use crate::components::keybindings::KeybindingContext;
use crate::error;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Duration;

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance for a loaded catalog
    pub fn new(catalog: Catalog) -> Self {
        info!("Creating new App instance ({} wires in catalog)", catalog.wire_count());
        Self {
            state: AppState::new(catalog),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    /// Read-only access to application state
    #[allow(dead_code)] // exercised through the library interface
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable access to application state
    #[allow(dead_code)] // exercised through the library interface
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main application loop");

        loop {
            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if key_event.kind != KeyEventKind::Release
                            && self.handle_key_event(key_event)?
                        {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(_, _) => {
                        // ratatui re-measures on the next draw
                    }
                    _ => {}
                }
            }

            // Render UI
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context);
            })?;
        }

        Ok(())
    }

    /// Handle keyboard input events.
    ///
    /// Returns `Ok(true)` when the application should exit.
    pub fn handle_key_event(
        &mut self,
        key_event: KeyEvent,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        // Help overlay swallows all input until dismissed
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.toggle_help();
            }
            return Ok(false);
        }

        // Global help toggle with '?'
        if key_event.code == KeyCode::Char('?') {
            self.toggle_help();
            return Ok(false);
        }

        match self.state.mode {
            AppMode::Overview => self.handle_overview_key(key_event),
            AppMode::WirePicker => {
                self.handle_wire_picker_key(key_event);
                Ok(false)
            }
            AppMode::SizePicker => {
                self.handle_size_picker_key(key_event);
                Ok(false)
            }
            AppMode::ConfirmReset => {
                self.handle_confirm_reset_key(key_event);
                Ok(false)
            }
        }
    }

    /// Overview screen: stepper keys act on the wire under the cursor
    fn handle_overview_key(
        &mut self,
        key_event: KeyEvent,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Exit requested from overview");
                return Ok(true);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.overview_selection = self.state.overview_selection.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.overview_selection + 1 < self.state.selection.len() {
                    self.state.overview_selection += 1;
                }
            }
            KeyCode::Char('a') => {
                self.open_wire_picker();
            }
            KeyCode::Char('s') => {
                self.open_size_picker();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(id) = self.state.overview_wire_id() {
                    self.state.selection.increment(&id);
                    self.after_selection_change();
                }
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                if let Some(id) = self.state.overview_wire_id() {
                    self.state.selection.decrement(&id);
                    self.after_selection_change();
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.state.overview_wire_id() {
                    self.state.selection.toggle(&id);
                    self.state.status_message = format!("Removed {}", id);
                    self.after_selection_change();
                }
            }
            KeyCode::Char('r') => {
                if !self.state.selection.is_empty() {
                    self.state.pre_dialog_mode = Some(AppMode::Overview);
                    self.state.mode = AppMode::ConfirmReset;
                }
            }
            _ => {}
        }
        Ok(false)
    }

    /// Wire picker dialog: toggle/step the wire under the cursor
    fn handle_wire_picker_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.picker_move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.picker_move_down(),
            KeyCode::Char(' ') => {
                if let Some(id) = self.state.picker_wire_id() {
                    self.state.selection.toggle(&id);
                    self.after_selection_change();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(id) = self.state.picker_wire_id() {
                    self.state.selection.increment(&id);
                    self.after_selection_change();
                }
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                if let Some(id) = self.state.picker_wire_id() {
                    self.state.selection.decrement(&id);
                    self.after_selection_change();
                }
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                self.close_dialog();
            }
            _ => {}
        }
    }

    /// Size picker dialog
    fn handle_size_picker_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.size_move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.size_move_down(),
            KeyCode::Enter => {
                let size = self.state.size_under_cursor();
                self.state.conduit_size = size;
                self.state.status_message = format!("Conduit size set to {}", size.label());
                self.state.recompute();
                self.close_dialog();
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.close_dialog();
            }
            _ => {}
        }
    }

    /// Reset confirmation dialog
    fn handle_confirm_reset_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.state.selection.reset();
                self.state.status_message = "All selections cleared".to_string();
                self.after_selection_change();
                self.close_dialog();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.close_dialog();
            }
            _ => {}
        }
    }

    /// Open the wire picker dialog
    pub fn open_wire_picker(&mut self) {
        self.state.pre_dialog_mode = Some(self.state.mode.clone());
        self.state.mode = AppMode::WirePicker;
    }

    /// Open the conduit size picker dialog
    pub fn open_size_picker(&mut self) {
        use strum::IntoEnumIterator;
        self.state.size_selection = crate::conduit::TradeSize::iter()
            .position(|s| s == self.state.conduit_size)
            .unwrap_or(0);
        self.state.pre_dialog_mode = Some(self.state.mode.clone());
        self.state.mode = AppMode::SizePicker;
    }

    /// Return to the mode that was active before the current dialog
    fn close_dialog(&mut self) {
        self.state.mode = self
            .state
            .pre_dialog_mode
            .take()
            .unwrap_or(AppMode::Overview);
    }

    /// Recompute and re-clamp after any selection mutation
    fn after_selection_change(&mut self) {
        self.state.recompute();
        self.state.clamp_overview_selection();
    }
}

/// Set up the terminal, run the app, and always restore the terminal.
pub fn run_tui(catalog: Catalog) -> Result<(), Box<dyn std::error::Error>> {
    use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
    use std::io::stdout;

    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| error::general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| error::general_error(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| error::general_error(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(catalog);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
