//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. Feeds both the navigation bar and the help overlay.

#![allow(dead_code)]

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Toggle,
    Increment,
    Decrement,
    Remove,
    AddWires,
    PickSize,
    Reset,
    Confirm,
    Cancel,
    Quit,
    Help,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// A titled section of help content
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        self.mode_bindings.insert(
            AppMode::Overview,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up/Down", "Select wire"),
                Keybinding::new(KeyCode::Char('a'), KeyAction::AddWires, "A", "Add wires"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::PickSize, "S", "Conduit size"),
                Keybinding::new(KeyCode::Char('+'), KeyAction::Increment, "+/-", "Quantity"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::Remove, "D", "Remove wire"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::Reset, "R", "Reset"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::WirePicker,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up/Down", "Navigate"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Select/deselect"),
                Keybinding::new(KeyCode::Char('+'), KeyAction::Increment, "+/-", "Quantity"),
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter/Esc", "Done"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::SizePicker,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up/Down", "Navigate"),
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Choose size"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::ConfirmReset,
            vec![
                Keybinding::new(KeyCode::Char('y'), KeyAction::Confirm, "Y", "Reset selections"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::Cancel, "N/Esc", "Keep selections"),
            ],
        );
    }

    /// Bindings for a specific mode (without globals)
    pub fn bindings_for(&self, mode: &AppMode) -> &[Keybinding] {
        self.mode_bindings
            .get(mode)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Items for the navigation bar: mode bindings followed by globals.
    pub fn nav_items(&self, mode: &AppMode) -> Vec<(String, String)> {
        self.bindings_for(mode)
            .iter()
            .chain(self.global_bindings.iter())
            .map(|kb| (kb.display.clone(), kb.description.clone()))
            .collect()
    }

    /// Sections for the help overlay.
    pub fn help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let mode_items: Vec<(String, String)> = self
            .bindings_for(mode)
            .iter()
            .map(|kb| (kb.display.clone(), kb.description.clone()))
            .collect();
        let global_items: Vec<(String, String)> = self
            .global_bindings
            .iter()
            .map(|kb| (kb.display.clone(), kb.description.clone()))
            .collect();

        vec![
            HelpSection {
                title: "This screen".to_string(),
                items: mode_items,
            },
            HelpSection {
                title: "Global".to_string(),
                items: global_items,
            },
        ]
    }
}
