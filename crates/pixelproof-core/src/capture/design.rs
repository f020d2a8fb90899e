//! Design-side normalization from a design-tool node.
//!
//! The node arrives as JSON in the design tool's own shape. Fields the tool
//! may report as "mixed" or in varying shapes are kept as raw JSON and
//! only read as numbers when they are numbers.

use crate::fingerprint::{Category, Color, Fingerprint, LeafValue};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Node type that carries typography.
pub const TEXT_NODE: &str = "TEXT";
/// Paint type that yields a background color.
pub const SOLID_PAINT: &str = "SOLID";

/// The subset of a design-tool node read during normalization.
///
/// A key missing from the JSON is `None`. A key present with `null` is
/// `Some(Value::Null)`: the node has the field, its value was not captured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Value>,
    /// Either `{ "value": n, "unit": .. }` or a unit-only object for "auto"
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub fills: Option<Value>,
}

/// Keeps a present key as `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Normalize a design node into a design fingerprint.
///
/// Categories are emitted only when the node carries them:
///
/// | Category | Emitted when |
/// |---|---|
/// | typography | node type is `TEXT` |
/// | border | the `cornerRadius` key is present, even as `null` |
/// | spacing | the `paddingTop` key is present, even as `null` |
/// | colors | the first fill is a `SOLID` paint with a color |
pub fn design_fingerprint(node: &DesignNode) -> Fingerprint {
    let mut fp = Fingerprint::new();

    if node.node_type == TEXT_NODE {
        fp.insert(
            Category::Typography,
            "fontSize",
            number_leaf(node.font_size.as_ref()),
        );
        fp.insert(
            Category::Typography,
            "fontWeight",
            number_leaf(node.font_weight.as_ref()),
        );
        let line_height = node.line_height.as_ref().and_then(|lh| lh.get("value"));
        fp.insert(Category::Typography, "lineHeight", number_leaf(line_height));
    }

    if let Some(radius) = &node.corner_radius {
        fp.insert(Category::Border, "radius", number_leaf(Some(radius)));
    }

    if node.padding_top.is_some() {
        for (name, value) in [
            ("paddingTop", &node.padding_top),
            ("paddingRight", &node.padding_right),
            ("paddingBottom", &node.padding_bottom),
            ("paddingLeft", &node.padding_left),
        ] {
            fp.insert(Category::Spacing, name, number_leaf(value.as_ref()));
        }
    }

    if let Some(background) = first_solid_fill(node.fills.as_ref()) {
        fp.insert(Category::Colors, "background", background);
    }

    fp
}

fn number_leaf(value: Option<&Value>) -> LeafValue {
    value.and_then(Value::as_f64).into()
}

fn first_solid_fill(fills: Option<&Value>) -> Option<Color> {
    let fill = fills?.as_array()?.first()?;
    if fill.get("type").and_then(Value::as_str) != Some(SOLID_PAINT) {
        return None;
    }
    let color = fill.get("color")?;
    let channel = |name: &str| color.get(name).and_then(Value::as_f64).map(unit_to_byte);
    Some(Color::new(channel("r")?, channel("g")?, channel("b")?))
}

/// Map a `0..=1` channel to `0..=255`, rounding half away from zero.
fn unit_to_byte(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(v: Value) -> DesignNode {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_text_node_typography() {
        let fp = design_fingerprint(&node(json!({
            "type": "TEXT",
            "fontSize": 16,
            "fontWeight": 400,
            "lineHeight": {"value": 24, "unit": "PIXELS"}
        })));

        assert_eq!(
            fp.get(Category::Typography, "fontSize"),
            Some(&LeafValue::Number(16.0))
        );
        assert_eq!(
            fp.get(Category::Typography, "lineHeight"),
            Some(&LeafValue::Number(24.0))
        );
        assert!(fp.category(Category::Border).is_none());
        assert!(fp.category(Category::Spacing).is_none());
    }

    #[test]
    fn test_auto_line_height_and_mixed_font_size_are_absent() {
        let fp = design_fingerprint(&node(json!({
            "type": "TEXT",
            "fontSize": "mixed",
            "lineHeight": {"unit": "AUTO"}
        })));
        assert_eq!(
            fp.get(Category::Typography, "fontSize"),
            Some(&LeafValue::Absent)
        );
        assert_eq!(
            fp.get(Category::Typography, "fontWeight"),
            Some(&LeafValue::Absent)
        );
        assert_eq!(
            fp.get(Category::Typography, "lineHeight"),
            Some(&LeafValue::Absent)
        );
    }

    #[test]
    fn test_non_text_node_has_no_typography() {
        let fp = design_fingerprint(&node(json!({"type": "FRAME", "fontSize": 16})));
        assert!(fp.category(Category::Typography).is_none());
    }

    #[test]
    fn test_frame_with_padding_and_radius() {
        let fp = design_fingerprint(&node(json!({
            "type": "FRAME",
            "cornerRadius": 8,
            "paddingTop": 12,
            "paddingLeft": 16
        })));
        assert_eq!(
            fp.get(Category::Border, "radius"),
            Some(&LeafValue::Number(8.0))
        );
        assert_eq!(fp.category(Category::Spacing).map(|c| c.len()), Some(4));
        assert_eq!(
            fp.get(Category::Spacing, "paddingRight"),
            Some(&LeafValue::Absent)
        );
        assert_eq!(
            fp.get(Category::Spacing, "paddingLeft"),
            Some(&LeafValue::Number(16.0))
        );
    }

    #[test]
    fn test_null_gating_keys_still_emit_categories() {
        let fp = design_fingerprint(&node(json!({
            "type": "FRAME",
            "cornerRadius": null,
            "paddingTop": null,
            "paddingLeft": 4
        })));
        assert_eq!(fp.get(Category::Border, "radius"), Some(&LeafValue::Absent));
        assert_eq!(fp.category(Category::Spacing).map(|c| c.len()), Some(4));
        assert_eq!(
            fp.get(Category::Spacing, "paddingTop"),
            Some(&LeafValue::Absent)
        );
        assert_eq!(
            fp.get(Category::Spacing, "paddingLeft"),
            Some(&LeafValue::Number(4.0))
        );
        assert_eq!(fp.property_count(), 5);
    }

    #[test]
    fn test_missing_gating_keys_emit_nothing() {
        let fp = design_fingerprint(&node(json!({"type": "FRAME", "paddingLeft": 4})));
        assert!(fp.is_empty());
    }

    #[test]
    fn test_node_json_keeps_null_versus_missing() {
        let n = node(json!({"type": "FRAME", "cornerRadius": null}));
        assert_eq!(n.corner_radius, Some(Value::Null));
        assert_eq!(n.padding_top, None);

        let back = serde_json::to_value(&n).unwrap();
        assert_eq!(back, json!({"type": "FRAME", "cornerRadius": null}));
        assert_eq!(node(back), n);
    }

    #[test]
    fn test_mixed_corner_radius_is_absent() {
        let fp = design_fingerprint(&node(json!({"type": "RECTANGLE", "cornerRadius": "mixed"})));
        assert_eq!(fp.get(Category::Border, "radius"), Some(&LeafValue::Absent));
    }

    #[test]
    fn test_solid_fill_becomes_background() {
        let fp = design_fingerprint(&node(json!({
            "type": "RECTANGLE",
            "fills": [
                {"type": "SOLID", "color": {"r": 0.2314, "g": 0.5098, "b": 0.9647}},
                {"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}
            ]
        })));
        assert_eq!(
            fp.get(Category::Colors, "background"),
            Some(&LeafValue::Color(Color::new(59, 130, 246)))
        );
    }

    #[test]
    fn test_non_solid_first_fill_has_no_colors() {
        let fp = design_fingerprint(&node(json!({
            "type": "RECTANGLE",
            "fills": [
                {"type": "GRADIENT_LINEAR"},
                {"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}
            ]
        })));
        assert!(fp.category(Category::Colors).is_none());

        let empty = design_fingerprint(&node(json!({"type": "RECTANGLE", "fills": []})));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_unit_to_byte_rounds_and_clamps() {
        assert_eq!(unit_to_byte(0.0), 0);
        assert_eq!(unit_to_byte(1.0), 255);
        assert_eq!(unit_to_byte(0.5), 128);
        assert_eq!(unit_to_byte(1.5), 255);
        assert_eq!(unit_to_byte(-0.2), 0);
    }
}
