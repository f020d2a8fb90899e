//! Fingerprint data types.
//!
//! Collections use `BTreeMap` so enumeration and serialization order is
//! deterministic: categories in declaration order, then properties in
//! lexical order.

use crate::errors::PixelProofError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// One of the fixed fingerprint categories.
///
/// Declaration order is enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spacing,
    Typography,
    Colors,
    Border,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Spacing,
        Category::Typography,
        Category::Colors,
        Category::Border,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Spacing => "spacing",
            Category::Typography => "typography",
            Category::Colors => "colors",
            Category::Border => "border",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PixelProofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PixelProofError::UnknownCategory {
                category: s.to_string(),
            })
    }
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels keyed by name, in `r, g, b` order
    pub fn channels(&self) -> [(&'static str, u8); 3] {
        [("r", self.r), ("g", self.g), ("b", self.b)]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A single property value within a fingerprint.
///
/// JSON encoding is untagged: `null`, a number, a string or an `{r,g,b}`
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum LeafValue {
    /// Property not applicable or not captured
    #[default]
    Absent,
    /// Native CSS pixel or weight units
    Number(f64),
    /// Keyword value such as `"normal"`
    Text(String),
    Color(Color),
}

/// Discriminant of a [`LeafValue`], used in log fields and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    Absent,
    Number,
    Text,
    Color,
}

impl LeafKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeafKind::Absent => "absent",
            LeafKind::Number => "number",
            LeafKind::Text => "text",
            LeafKind::Color => "color",
        }
    }
}

impl LeafValue {
    pub fn kind(&self) -> LeafKind {
        match self {
            LeafValue::Absent => LeafKind::Absent,
            LeafValue::Number(_) => LeafKind::Number,
            LeafValue::Text(_) => LeafKind::Text,
            LeafValue::Color(_) => LeafKind::Color,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, LeafValue::Absent)
    }
}

impl From<f64> for LeafValue {
    fn from(n: f64) -> Self {
        LeafValue::Number(n)
    }
}

impl From<Option<f64>> for LeafValue {
    fn from(n: Option<f64>) -> Self {
        n.map_or(LeafValue::Absent, LeafValue::Number)
    }
}

impl From<&str> for LeafValue {
    fn from(s: &str) -> Self {
        LeafValue::Text(s.to_string())
    }
}

impl From<String> for LeafValue {
    fn from(s: String) -> Self {
        LeafValue::Text(s)
    }
}

impl From<Color> for LeafValue {
    fn from(c: Color) -> Self {
        LeafValue::Color(c)
    }
}

impl From<Option<Color>> for LeafValue {
    fn from(c: Option<Color>) -> Self {
        c.map_or(LeafValue::Absent, LeafValue::Color)
    }
}

/// A normalized snapshot of one element's or node's style attributes.
///
/// Categories with no entries are simply missing; the comparator treats a
/// missing path the same as an explicit [`LeafValue::Absent`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint {
    categories: BTreeMap<Category, BTreeMap<String, LeafValue>>,
}

impl Fingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Fingerprint::insert`]
    pub fn with(
        mut self,
        category: Category,
        property: impl Into<String>,
        value: impl Into<LeafValue>,
    ) -> Self {
        self.insert(category, property, value);
        self
    }

    /// Set a property, replacing any previous value at the same path
    pub fn insert(
        &mut self,
        category: Category,
        property: impl Into<String>,
        value: impl Into<LeafValue>,
    ) {
        self.categories
            .entry(category)
            .or_default()
            .insert(property.into(), value.into());
    }

    /// Look up a property; `None` means the path does not exist
    pub fn get(&self, category: Category, property: &str) -> Option<&LeafValue> {
        self.categories.get(&category)?.get(property)
    }

    pub fn category(&self, category: Category) -> Option<&BTreeMap<String, LeafValue>> {
        self.categories.get(&category)
    }

    /// All `(category, property, value)` triples in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str, &LeafValue)> {
        self.categories.iter().flat_map(|(category, props)| {
            props
                .iter()
                .map(move |(name, value)| (*category, name.as_str(), value))
        })
    }

    /// Number of properties across all categories
    pub fn property_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.property_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_order_is_declaration_order() {
        let mut cats = vec![
            Category::Border,
            Category::Colors,
            Category::Spacing,
            Category::Typography,
        ];
        cats.sort();
        assert_eq!(cats, Category::ALL.to_vec());
    }

    #[test]
    fn test_category_from_str_rejects_unknown() {
        assert_eq!("colors".parse::<Category>().unwrap(), Category::Colors);
        let err = "layout".parse::<Category>().unwrap_err();
        assert_eq!(
            err,
            PixelProofError::UnknownCategory {
                category: "layout".to_string()
            }
        );
    }

    #[test]
    fn test_leaf_value_json_encoding() {
        assert_eq!(serde_json::to_value(LeafValue::Absent).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(LeafValue::Number(16.5)).unwrap(), json!(16.5));
        assert_eq!(
            serde_json::to_value(LeafValue::from("normal")).unwrap(),
            json!("normal")
        );
        assert_eq!(
            serde_json::to_value(LeafValue::from(Color::new(1, 2, 3))).unwrap(),
            json!({"r": 1, "g": 2, "b": 3})
        );
    }

    #[test]
    fn test_leaf_value_json_decoding() {
        let v: LeafValue = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(v, LeafValue::Absent);
        let v: LeafValue = serde_json::from_value(json!(400)).unwrap();
        assert_eq!(v, LeafValue::Number(400.0));
        let v: LeafValue = serde_json::from_value(json!("normal")).unwrap();
        assert_eq!(v, LeafValue::Text("normal".to_string()));
        let v: LeafValue = serde_json::from_value(json!({"r": 10, "g": 20, "b": 30})).unwrap();
        assert_eq!(v, LeafValue::Color(Color::new(10, 20, 30)));
    }

    #[test]
    fn test_leaf_value_rejects_out_of_range_channel() {
        let r: Result<LeafValue, _> = serde_json::from_value(json!({"r": 300, "g": 0, "b": 0}));
        assert!(r.is_err());
    }

    #[test]
    fn test_iter_follows_enumeration_order() {
        let fp = Fingerprint::new()
            .with(Category::Border, "radius", 4.0)
            .with(Category::Typography, "fontWeight", 400.0)
            .with(Category::Typography, "fontSize", 16.0)
            .with(Category::Spacing, "paddingTop", 8.0);

        let order: Vec<(Category, &str)> = fp.iter().map(|(c, p, _)| (c, p)).collect();
        assert_eq!(
            order,
            vec![
                (Category::Spacing, "paddingTop"),
                (Category::Typography, "fontSize"),
                (Category::Typography, "fontWeight"),
                (Category::Border, "radius"),
            ]
        );
        assert_eq!(fp.property_count(), 4);
    }

    #[test]
    fn test_get_missing_path() {
        let fp = Fingerprint::new().with(Category::Typography, "fontSize", 16.0);
        assert!(fp.get(Category::Colors, "text").is_none());
        assert!(fp.get(Category::Typography, "lineHeight").is_none());
        assert_eq!(
            fp.get(Category::Typography, "fontSize"),
            Some(&LeafValue::Number(16.0))
        );
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::new(59, 130, 246).to_string(), "rgb(59, 130, 246)");
    }
}
