//! Property-Based Tests
//!
//! Uses proptest for testing invariants and edge cases:
//! - Trade-size string round-trips (display → parse)
//! - Selection reducer invariants under arbitrary operation sequences
//! - Fill computation bounds

use proptest::prelude::*;

// =============================================================================
// TradeSize Enum Property Tests
// =============================================================================

use conduitfill::conduit::TradeSize;

/// Strategy for generating valid TradeSize variants
fn trade_size_strategy() -> impl Strategy<Value = TradeSize> {
    prop_oneof![
        Just(TradeSize::Half),
        Just(TradeSize::ThreeQuarter),
        Just(TradeSize::One),
        Just(TradeSize::OneAndQuarter),
        Just(TradeSize::OneAndHalf),
        Just(TradeSize::Two),
        Just(TradeSize::TwoAndHalf),
        Just(TradeSize::Three),
    ]
}

proptest! {
    /// TradeSize: to_string → parse round-trip is identity
    #[test]
    fn trade_size_roundtrip(size in trade_size_strategy()) {
        let s = size.to_string();
        let parsed: TradeSize = s.parse().expect("Should parse");
        prop_assert_eq!(size, parsed);
    }

    /// TradeSize: every registered diameter is a sane positive number
    #[test]
    fn trade_size_diameter_is_positive(size in trade_size_strategy()) {
        let d = size.internal_diameter_in();
        prop_assert!(d > 0.0);
        prop_assert!(d < 4.0);
    }
}

// =============================================================================
// Selection Reducer Property Tests
// =============================================================================

use conduitfill::selection::Selection;

/// A single reducer operation on a small id space
#[derive(Debug, Clone)]
enum Op {
    Toggle(u8),
    Increment(u8),
    Decrement(u8),
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..5).prop_map(Op::Toggle),
        (0u8..5).prop_map(Op::Increment),
        (0u8..5).prop_map(Op::Decrement),
        Just(Op::Reset),
    ]
}

fn apply(selection: &mut Selection, op: &Op) {
    match op {
        Op::Toggle(n) => selection.toggle(&format!("wire-{n}")),
        Op::Increment(n) => selection.increment(&format!("wire-{n}")),
        Op::Decrement(n) => selection.decrement(&format!("wire-{n}")),
        Op::Reset => selection.reset(),
    }
}

proptest! {
    /// No operation sequence ever produces an entry with quantity 0 or below
    #[test]
    fn selection_quantities_always_positive(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut selection = Selection::new();
        for op in &ops {
            apply(&mut selection, op);
            for (_, quantity) in selection.iter() {
                prop_assert!(quantity >= 1);
            }
        }
    }

    /// Toggling an unselected wire twice restores the previous selection
    #[test]
    fn toggle_twice_is_identity(ops in prop::collection::vec(op_strategy(), 0..32), n in 0u8..5) {
        let mut selection = Selection::new();
        for op in &ops {
            apply(&mut selection, op);
        }
        let id = format!("fresh-{n}");
        prop_assume!(!selection.contains(&id));

        let before = selection.clone();
        selection.toggle(&id);
        selection.toggle(&id);
        prop_assert_eq!(selection, before);
    }

    /// Reset always yields the empty mapping regardless of prior state
    #[test]
    fn reset_always_empties(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut selection = Selection::new();
        for op in &ops {
            apply(&mut selection, op);
        }
        selection.reset();
        prop_assert!(selection.is_empty());
        prop_assert_eq!(selection, Selection::new());
    }

    /// Increment then decrement is identity on the quantity
    #[test]
    fn increment_then_decrement_is_identity(ops in prop::collection::vec(op_strategy(), 0..32), n in 0u8..5) {
        let mut selection = Selection::new();
        for op in &ops {
            apply(&mut selection, op);
        }
        let id = format!("wire-{n}");
        let before = selection.quantity(&id);
        selection.increment(&id);
        selection.decrement(&id);
        prop_assert_eq!(selection.quantity(&id), before);
    }
}

// =============================================================================
// Fill Computation Property Tests
// =============================================================================

use conduitfill::catalog::Catalog;
use conduitfill::fill::compute_fill_for_size;

proptest! {
    /// Fill is non-negative and monotone in quantity for any catalog wire
    #[test]
    fn fill_monotone_in_quantity(
        size in trade_size_strategy(),
        wire_index in 0usize..10,
        quantity in 1u32..20,
    ) {
        let catalog = Catalog::builtin().unwrap();
        let wires: Vec<String> = catalog.wires().map(|w| w.id.clone()).collect();
        let id = &wires[wire_index % wires.len()];

        let mut smaller = Selection::new();
        smaller.set_quantity(id, quantity);
        let mut larger = Selection::new();
        larger.set_quantity(id, quantity + 1);

        let lo = compute_fill_for_size(&smaller, &catalog, size).unwrap();
        let hi = compute_fill_for_size(&larger, &catalog, size).unwrap();
        prop_assert!(lo >= 0.0);
        prop_assert!(hi >= lo);
    }
}
