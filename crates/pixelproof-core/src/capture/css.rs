//! Rendered-side normalization from computed CSS.
//!
//! A browser reports computed style as strings (`"12px"`, `"rgb(0, 0, 0)"`,
//! `"normal"`). These helpers turn such a map into a [`Fingerprint`].

use crate::fingerprint::{Category, Color, Fingerprint, LeafValue};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Computed style keyed by camelCase CSS property name.
pub type ComputedStyle = BTreeMap<String, String>;

const LEADING_NUMBER_REGEX: &str = r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?";
const INTEGER_RUN_REGEX: &str = r"\d+";

const SPACING_PROPERTIES: [&str; 8] = [
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
];

fn leading_number_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LEADING_NUMBER_REGEX).ok())
        .as_ref()
}

fn integer_run_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(INTEGER_RUN_REGEX).ok())
        .as_ref()
}

/// Parse the leading decimal number of a CSS value, ignoring any unit
/// suffix. `"12.5px"` gives `12.5`; `"normal"` gives `None`.
pub fn parse_css_number(value: &str) -> Option<f64> {
    let found = leading_number_regex()?.find(value)?;
    found.as_str().trim().parse::<f64>().ok()
}

/// Extract an RGB color from `rgb(...)` / `rgba(...)` notation.
///
/// Takes the first three integer runs as the channels; alpha is ignored.
/// Returns `None` with fewer than three runs or a run above 255.
pub fn parse_css_rgb(value: &str) -> Option<Color> {
    let mut runs = integer_run_regex()?
        .find_iter(value)
        .map(|m| m.as_str().parse::<u8>().ok());
    let r = runs.next()??;
    let g = runs.next()??;
    let b = runs.next()??;
    Some(Color::new(r, g, b))
}

/// Normalize a computed-style map into a rendered fingerprint.
///
/// Every well-known property is emitted. Values that cannot be parsed
/// become [`LeafValue::Absent`], except `border.radius`, which falls back
/// to `0`.
pub fn rendered_fingerprint(style: &ComputedStyle) -> Fingerprint {
    let number = |name: &str| -> LeafValue {
        style
            .get(name)
            .and_then(|v| parse_css_number(v))
            .into()
    };
    let color = |name: &str| -> LeafValue {
        style
            .get(name)
            .and_then(|v| parse_css_rgb(v))
            .into()
    };

    let mut fp = Fingerprint::new();

    for property in SPACING_PROPERTIES {
        fp.insert(Category::Spacing, property, number(property));
    }

    fp.insert(Category::Typography, "fontSize", number("fontSize"));
    fp.insert(Category::Typography, "fontWeight", number("fontWeight"));
    let line_height = match style.get("lineHeight") {
        Some(raw) => match parse_css_number(raw) {
            Some(n) => LeafValue::Number(n),
            None => LeafValue::Text(raw.clone()),
        },
        None => LeafValue::Absent,
    };
    fp.insert(Category::Typography, "lineHeight", line_height);

    fp.insert(Category::Colors, "text", color("color"));
    fp.insert(Category::Colors, "background", color("backgroundColor"));

    let radius = style
        .get("borderRadius")
        .and_then(|v| parse_css_number(v))
        .unwrap_or(0.0);
    fp.insert(Category::Border, "radius", radius);

    fp
}
