//! Integration tests for the fill calculator
//!
//! Exercises the documented behavior end to end: the worked examples,
//! silent skipping of unresolvable ids and malformed diameters, and the
//! built-in catalog + trade-size registry together.

use conduitfill::catalog::Catalog;
use conduitfill::conduit::TradeSize;
use conduitfill::fill::{compute_fill, compute_fill_for_size};
use conduitfill::selection::Selection;

fn catalog(json: &str) -> Catalog {
    Catalog::from_json(json).unwrap()
}

#[test]
fn test_empty_selection_is_zero_for_every_size() {
    use strum::IntoEnumIterator;

    let catalog = Catalog::builtin().unwrap();
    let selection = Selection::new();
    for size in TradeSize::iter() {
        assert_eq!(compute_fill_for_size(&selection, &catalog, size), Some(0.0));
    }
}

#[test]
fn test_single_wire_formula() {
    // (d / D)^2 * 100 for one wire of diameter d in a conduit of diameter D
    let catalog = catalog(
        r#"[{ "manufacturer_id": 1, "name": "Test", "wires": [
            { "id": "w", "wire_type": "T", "outer_diameter_in": "0.3" }
        ]}]"#,
    );
    let mut selection = Selection::new();
    selection.toggle("w");

    // 1" conduit: conduit area ~ 0.8642 in², wire area ~ 0.0707 in²
    assert_eq!(compute_fill(&selection, &catalog, 1.049), Some(8.18));
}

#[test]
fn test_two_half_inch_wires_in_three_quarter_conduit() {
    let catalog = catalog(
        r#"[{ "manufacturer_id": 1, "name": "Test", "wires": [
            { "id": "w", "wire_type": "T", "outer_diameter_in": "0.5" }
        ]}]"#,
    );
    let mut selection = Selection::new();
    selection.set_quantity("w", 2);

    // Wire area ~ 0.3927 in², conduit area ~ 0.5333 in²
    let result = compute_fill_for_size(&selection, &catalog, TradeSize::ThreeQuarter).unwrap();
    assert_eq!(result, 73.64);
}

#[test]
fn test_builtin_catalog_realistic_pull() {
    // Three THHN 12 AWG in a 1/2" conduit: 3 * (0.130 / 0.622)^2 * 100
    let catalog = Catalog::builtin().unwrap();
    let mut selection = Selection::new();
    selection.set_quantity("sw-thhn-12", 3);

    let result = compute_fill_for_size(&selection, &catalog, TradeSize::Half).unwrap();
    let expected = 3.0 * (0.130_f64 / 0.622).powi(2) * 100.0;
    assert!((result - expected).abs() < 0.005);
}

#[test]
fn test_unknown_wire_id_is_silently_skipped() {
    let catalog = Catalog::builtin().unwrap();
    let mut with_ghost = Selection::new();
    with_ghost.toggle("sw-thhn-10");
    with_ghost.toggle("not-in-catalog");

    let mut without_ghost = Selection::new();
    without_ghost.toggle("sw-thhn-10");

    assert_eq!(
        compute_fill_for_size(&with_ghost, &catalog, TradeSize::One),
        compute_fill_for_size(&without_ghost, &catalog, TradeSize::One)
    );
}

#[test]
fn test_malformed_diameter_never_produces_nan() {
    let catalog = catalog(
        r#"[{ "manufacturer_id": 1, "name": "Test", "wires": [
            { "id": "good", "wire_type": "T", "outer_diameter_in": "0.25" },
            { "id": "bad", "wire_type": "T", "outer_diameter_in": "twelve" },
            { "id": "empty", "wire_type": "T", "outer_diameter_in": "" }
        ]}]"#,
    );
    let mut selection = Selection::new();
    selection.toggle("good");
    selection.toggle("bad");
    selection.toggle("empty");

    let result = compute_fill_for_size(&selection, &catalog, TradeSize::Two).unwrap();
    assert!(result.is_finite());

    let mut only_good = Selection::new();
    only_good.toggle("good");
    assert_eq!(
        Some(result),
        compute_fill_for_size(&only_good, &catalog, TradeSize::Two)
    );
}

#[test]
fn test_overfill_is_reported_not_rejected() {
    let catalog = Catalog::builtin().unwrap();
    let mut selection = Selection::new();
    // Far more copper than a 1/2" conduit can hold
    selection.set_quantity("sw-thhn-2-0", 10);

    let result = compute_fill_for_size(&selection, &catalog, TradeSize::Half).unwrap();
    assert!(result > 100.0);
}

#[test]
fn test_invalid_conduit_diameter_declines_to_compute() {
    let catalog = Catalog::builtin().unwrap();
    let mut selection = Selection::new();
    selection.toggle("sw-thhn-12");

    assert_eq!(compute_fill(&selection, &catalog, 0.0), None);
    assert_eq!(compute_fill(&selection, &catalog, f64::INFINITY), None);
}

#[test]
fn test_result_is_rounded_to_two_decimals() {
    let catalog = Catalog::builtin().unwrap();
    let mut selection = Selection::new();
    selection.toggle("sw-thhn-14");

    let result = compute_fill_for_size(&selection, &catalog, TradeSize::Three).unwrap();
    assert_eq!(result, (result * 100.0).round() / 100.0);
}
