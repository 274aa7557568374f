//! Wire selection state
//!
//! A mapping from wire id to selected quantity. Quantities are always at
//! least 1: decrementing a quantity-1 entry removes it, and toggling a
//! selected wire deselects it. All transitions are synchronous, total, and
//! defined for every input.

use std::collections::BTreeMap;

/// Selected wires keyed by wire id.
///
/// Backed by a `BTreeMap` so the selected-wire list renders in a stable
/// order across redraws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: BTreeMap<String, u32>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the wire if absent (quantity 1), deselect it if present.
    pub fn toggle(&mut self, wire_id: &str) {
        if self.entries.remove(wire_id).is_none() {
            self.entries.insert(wire_id.to_string(), 1);
        }
    }

    /// Add one to the wire's quantity, selecting it if absent.
    pub fn increment(&mut self, wire_id: &str) {
        *self.entries.entry(wire_id.to_string()).or_insert(0) += 1;
    }

    /// Subtract one from the wire's quantity, removing the entry at 1.
    ///
    /// Quantities never persist at 0 or below. Decrementing an absent wire
    /// is a no-op.
    pub fn decrement(&mut self, wire_id: &str) {
        match self.entries.get_mut(wire_id) {
            Some(qty) if *qty > 1 => *qty -= 1,
            Some(_) => {
                self.entries.remove(wire_id);
            }
            None => {}
        }
    }

    /// Set an exact quantity, removing the entry when `quantity` is 0.
    pub fn set_quantity(&mut self, wire_id: &str, quantity: u32) {
        if quantity == 0 {
            self.entries.remove(wire_id);
        } else {
            self.entries.insert(wire_id.to_string(), quantity);
        }
    }

    /// Clear all selections.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Quantity for a wire id, 0 when not selected.
    pub fn quantity(&self, wire_id: &str) -> u32 {
        self.entries.get(wire_id).copied().unwrap_or(0)
    }

    /// Whether the wire is currently selected.
    pub fn contains(&self, wire_id: &str) -> bool {
        self.entries.contains_key(wire_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct selected wires (not total quantity).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over (wire id, quantity) pairs in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(id, qty)| (id.as_str(), *qty))
    }
}

impl FromIterator<(String, u32)> for Selection {
    /// Build a selection from (id, quantity) pairs, dropping zero quantities.
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (id, qty) in iter {
            selection.set_quantity(&id, qty);
        }
        selection
    }
}
