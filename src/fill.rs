//! Fill percentage computation
//!
//! Formula: fill = total wire cross-sectional area / conduit internal
//! cross-sectional area × 100, rounded to 2 decimal places.

use crate::catalog::Catalog;
use crate::conduit::TradeSize;
use crate::selection::Selection;

/// Cross-sectional area of a circle from its diameter.
pub fn circle_area(diameter_in: f64) -> f64 {
    std::f64::consts::PI * (diameter_in / 2.0).powi(2)
}

/// Round to 2 decimal places for display.
fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the fill percentage for a selection in a conduit of the given
/// internal diameter (inches).
///
/// Selection entries that don't resolve against the catalog, and wires
/// whose outer diameter fails numeric parsing, contribute zero area.
/// Returns `None` when the conduit diameter is zero, negative, or
/// non-finite rather than dividing by zero. No upper bound is enforced:
/// results above 100% mean the pull doesn't fit.
pub fn compute_fill(selection: &Selection, catalog: &Catalog, conduit_diameter_in: f64) -> Option<f64> {
    if !conduit_diameter_in.is_finite() || conduit_diameter_in <= 0.0 {
        return None;
    }

    let conduit_area = circle_area(conduit_diameter_in);

    let mut total_wire_area = 0.0;
    for (wire_id, quantity) in selection.iter() {
        let Some(wire) = catalog.find_wire(wire_id) else {
            continue;
        };
        let Some(diameter) = wire.outer_diameter() else {
            continue;
        };
        total_wire_area += circle_area(diameter) * f64::from(quantity);
    }

    Some(round_percent(total_wire_area / conduit_area * 100.0))
}

/// Compute the fill percentage for a registered trade size.
pub fn compute_fill_for_size(selection: &Selection, catalog: &Catalog, size: TradeSize) -> Option<f64> {
    compute_fill(selection, catalog, size.internal_diameter_in())
}
