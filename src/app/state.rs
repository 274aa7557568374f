//! Application state definitions
//!
//! Contains all state-related types for the application including AppState
//! and AppMode, plus the row model for the wire picker dialog.

#![allow(dead_code)]

use crate::catalog::Catalog;
use crate::conduit::TradeSize;
use crate::fill;
use crate::selection::Selection;
use strum::IntoEnumIterator;

/// Application operating modes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Overview - selected wires, conduit size, and the computed fill
    Overview,
    /// Wire picker dialog - catalog grouped by manufacturer
    WirePicker,
    /// Conduit size picker dialog
    SizePicker,
    /// Confirmation dialog before clearing all selections
    ConfirmReset,
}

/// A row in the wire picker list.
///
/// Manufacturer headers are rendered but never selectable; the cursor
/// skips over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerRow {
    /// Manufacturer group header (index into the catalog's manufacturers)
    Manufacturer(usize),
    /// A selectable wire (manufacturer index, wire index within it)
    Wire { manufacturer: usize, wire: usize },
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Wire catalog, loaded once at startup and never mutated
    pub catalog: Catalog,
    /// Selected wires with quantities
    pub selection: Selection,
    /// Chosen conduit trade size
    pub conduit_size: TradeSize,
    /// Fill percentage for the current selection and size
    pub fill_result: Option<f64>,
    /// Status message for user feedback
    pub status_message: String,
    /// Cursor position in the overview's selected-wire list
    pub overview_selection: usize,
    /// Cursor position in the wire picker (index into picker rows)
    pub picker_selection: usize,
    /// Cursor position in the size picker
    pub size_selection: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Previous mode to return to after a dialog
    pub pre_dialog_mode: Option<AppMode>,
}

impl AppState {
    /// Create the initial state for a loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        let conduit_size = TradeSize::default();
        let selection = Selection::new();
        let fill_result = fill::compute_fill_for_size(&selection, &catalog, conduit_size);
        let picker_selection = Self::first_wire_row(&catalog);
        Self {
            mode: AppMode::Overview,
            catalog,
            selection,
            conduit_size,
            fill_result,
            status_message: "Welcome to the conduit fill calculator".to_string(),
            overview_selection: 0,
            picker_selection,
            size_selection: TradeSize::iter()
                .position(|s| s == conduit_size)
                .unwrap_or(0),
            help_visible: false,
            pre_dialog_mode: None,
        }
    }

    /// Recompute the fill percentage.
    ///
    /// Called after every state change; the computation is cheap enough to
    /// run unconditionally.
    pub fn recompute(&mut self) {
        self.fill_result =
            fill::compute_fill_for_size(&self.selection, &self.catalog, self.conduit_size);
    }

    // -------------------------------------------------------------------------
    // Overview: selected-wire list
    // -------------------------------------------------------------------------

    /// Wire ids of the current selection in display order.
    pub fn selected_wire_ids(&self) -> Vec<String> {
        self.selection.iter().map(|(id, _)| id.to_string()).collect()
    }

    /// Wire id under the overview cursor, if any.
    pub fn overview_wire_id(&self) -> Option<String> {
        self.selected_wire_ids().get(self.overview_selection).cloned()
    }

    /// Keep the overview cursor inside the selected-wire list after a
    /// removal shrinks it.
    pub fn clamp_overview_selection(&mut self) {
        let len = self.selection.len();
        if len == 0 {
            self.overview_selection = 0;
        } else if self.overview_selection >= len {
            self.overview_selection = len - 1;
        }
    }

    // -------------------------------------------------------------------------
    // Wire picker rows
    // -------------------------------------------------------------------------

    /// Flattened picker rows: a header per manufacturer followed by its wires.
    pub fn picker_rows(&self) -> Vec<PickerRow> {
        let mut rows = Vec::new();
        for (m_idx, manufacturer) in self.catalog.manufacturers().iter().enumerate() {
            rows.push(PickerRow::Manufacturer(m_idx));
            for w_idx in 0..manufacturer.wires.len() {
                rows.push(PickerRow::Wire {
                    manufacturer: m_idx,
                    wire: w_idx,
                });
            }
        }
        rows
    }

    /// Index of the first selectable wire row.
    fn first_wire_row(catalog: &Catalog) -> usize {
        let mut row = 0;
        for manufacturer in catalog.manufacturers() {
            row += 1; // header row
            if !manufacturer.wires.is_empty() {
                return row;
            }
        }
        0
    }

    /// Wire id under the picker cursor, if the cursor is on a wire row.
    pub fn picker_wire_id(&self) -> Option<String> {
        match self.picker_rows().get(self.picker_selection)? {
            PickerRow::Wire { manufacturer, wire } => Some(
                self.catalog.manufacturers()[*manufacturer].wires[*wire]
                    .id
                    .clone(),
            ),
            PickerRow::Manufacturer(_) => None,
        }
    }

    /// Move the picker cursor up, skipping manufacturer headers.
    pub fn picker_move_up(&mut self) {
        let rows = self.picker_rows();
        let mut idx = self.picker_selection;
        while idx > 0 {
            idx -= 1;
            if matches!(rows.get(idx), Some(PickerRow::Wire { .. })) {
                self.picker_selection = idx;
                return;
            }
        }
    }

    /// Move the picker cursor down, skipping manufacturer headers.
    pub fn picker_move_down(&mut self) {
        let rows = self.picker_rows();
        let mut idx = self.picker_selection;
        while idx + 1 < rows.len() {
            idx += 1;
            if matches!(rows.get(idx), Some(PickerRow::Wire { .. })) {
                self.picker_selection = idx;
                return;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Size picker
    // -------------------------------------------------------------------------

    /// Trade size under the size-picker cursor.
    pub fn size_under_cursor(&self) -> TradeSize {
        TradeSize::iter()
            .nth(self.size_selection)
            .unwrap_or_default()
    }

    pub fn size_move_up(&mut self) {
        self.size_selection = self.size_selection.saturating_sub(1);
    }

    pub fn size_move_down(&mut self) {
        let count = TradeSize::iter().count();
        if self.size_selection + 1 < count {
            self.size_selection += 1;
        }
    }
}
