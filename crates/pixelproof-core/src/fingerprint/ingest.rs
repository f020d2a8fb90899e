//! Boundary validation of untrusted fingerprint JSON.
//!
//! Capture collaborators hand fingerprints over as JSON. Anything that does
//! not match the schema fails fast here, so the comparator only ever sees
//! well-typed input.

use crate::errors::{ExError, PixelProofError};
use crate::fingerprint::model::{Category, Color, Fingerprint, LeafValue};
use serde_json::{Map, Value};

const OP: &str = "ingest_fingerprint";

impl Fingerprint {
    /// Parse a fingerprint from JSON text.
    ///
    /// # Errors
    ///
    /// - `InvalidFingerprint`: text is not JSON, the shape is wrong, or a
    ///   property name contains `.`
    /// - `UnknownCategory`: a top-level key is not a known category
    /// - `InvalidColor`: a color record has unknown keys or bad channels
    pub fn from_json_str(text: &str) -> Result<Fingerprint, ExError> {
        let raw: Value = serde_json::from_str(text)
            .map_err(|e| invalid(format!("not valid JSON: {}", e)))?;
        Fingerprint::from_json_value(raw)
    }

    /// Validate and convert an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`Fingerprint::from_json_str`], minus the JSON syntax case.
    pub fn from_json_value(raw: Value) -> Result<Fingerprint, ExError> {
        let root = match raw {
            Value::Object(root) => root,
            other => {
                return Err(invalid(format!(
                    "root must be an object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let mut fp = Fingerprint::new();
        for (category_name, props) in root {
            let category: Category = category_name
                .parse()
                .map_err(|e: PixelProofError| ExError::from(e).with_op(OP))?;

            let props = match props {
                Value::Object(props) => props,
                other => {
                    return Err(invalid(format!(
                        "category must be an object, got {}",
                        json_kind(&other)
                    ))
                    .with_property(category.as_str()))
                }
            };

            for (property, value) in props {
                if property.contains('.') {
                    return Err(invalid(format!(
                        "property name '{}' must not contain '.'",
                        property
                    ))
                    .with_property(format!("{}.{}", category, property)));
                }
                let leaf = parse_leaf(category, &property, value)?;
                fp.insert(category, property, leaf);
            }
        }

        Ok(fp)
    }
}

/// Parse a fingerprint slot that may hold explicit absence.
///
/// Empty input and JSON `null` mean "no fingerprint captured" and yield
/// `Ok(None)`, which the comparator turns into its nothing-to-compare result.
///
/// # Errors
///
/// Any non-null input must be a valid fingerprint; see
/// [`Fingerprint::from_json_str`].
pub fn parse_optional_fingerprint(text: &str) -> Result<Option<Fingerprint>, ExError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let raw: Value = serde_json::from_str(trimmed)
        .map_err(|e| invalid(format!("not valid JSON: {}", e)))?;
    if raw.is_null() {
        return Ok(None);
    }
    Fingerprint::from_json_value(raw).map(Some)
}

fn parse_leaf(category: Category, property: &str, value: Value) -> Result<LeafValue, ExError> {
    match value {
        Value::Null => Ok(LeafValue::Absent),
        Value::Number(n) => n.as_f64().map(LeafValue::Number).ok_or_else(|| {
            invalid(format!("number {} is not representable as f64", n))
                .with_property(format!("{}.{}", category, property))
        }),
        Value::String(s) => Ok(LeafValue::Text(s)),
        Value::Object(obj) => parse_color(category, property, obj).map(LeafValue::Color),
        other => Err(invalid(format!(
            "leaf must be null, number, string or color, got {}",
            json_kind(&other)
        ))
        .with_property(format!("{}.{}", category, property))),
    }
}

fn parse_color(
    category: Category,
    property: &str,
    obj: Map<String, Value>,
) -> Result<Color, ExError> {
    let path = format!("{}.{}", category, property);
    serde_json::from_value::<Color>(Value::Object(obj)).map_err(|e| {
        ExError::from(PixelProofError::InvalidColor {
            property: path,
            reason: format!("expected {{r,g,b}} with integer channels 0..=255: {}", e),
        })
        .with_op(OP)
    })
}

fn invalid(reason: String) -> ExError {
    ExError::from(PixelProofError::InvalidFingerprint { reason }).with_op(OP)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
