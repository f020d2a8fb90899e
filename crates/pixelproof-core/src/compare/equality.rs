//! Type-aware leaf equality.

use crate::fingerprint::{Color, LeafValue};

/// Tolerance applied when none is configured, in native units (px, weight
/// units, color channel steps).
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Decide whether two leaf values agree.
///
/// - `Absent` on either side never matches, not even `Absent` vs `Absent`
/// - numbers match when `|a - b| <= tolerance`; NaN never matches
/// - text matches only when identical
/// - colors match when every channel is within `tolerance`
/// - values of different kinds never match; no coercion is attempted
pub fn equal(a: &LeafValue, b: &LeafValue, tolerance: f64) -> bool {
    match (a, b) {
        (LeafValue::Absent, _) | (_, LeafValue::Absent) => false,
        (LeafValue::Number(x), LeafValue::Number(y)) => within(*x, *y, tolerance),
        (LeafValue::Text(x), LeafValue::Text(y)) => x == y,
        (LeafValue::Color(x), LeafValue::Color(y)) => colors_within(x, y, tolerance),
        (LeafValue::Number(_), _) | (LeafValue::Text(_), _) | (LeafValue::Color(_), _) => false,
    }
}

fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

fn colors_within(a: &Color, b: &Color, tolerance: f64) -> bool {
    a.channels()
        .iter()
        .zip(b.channels().iter())
        .all(|((_, x), (_, y))| within(f64::from(*x), f64::from(*y), tolerance))
}
