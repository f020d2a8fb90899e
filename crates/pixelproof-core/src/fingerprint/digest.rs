//! Content digest of a fingerprint.
//!
//! The digest is the hex SHA-256 of the fingerprint's canonical JSON. The
//! canonical form is built as a `serde_json::Value` whose object keys are
//! sorted, so equal fingerprints always hash the same bytes.

use crate::fingerprint::model::{Fingerprint, LeafValue};
use serde_json::{Map, Number, Value};
use sha2::{Digest, Sha256};

impl Fingerprint {
    /// Hex-encoded SHA-256 over the canonical JSON form (64 characters).
    pub fn digest(&self) -> String {
        hash_string(&self.canonical_json().to_string())
    }

    /// Canonical JSON form: the same shape as the serde encoding, with
    /// non-finite numbers written as `null`.
    pub fn canonical_json(&self) -> Value {
        let mut root = Map::new();
        for (category, property, value) in self.iter() {
            let entry = root
                .entry(category.as_str())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(props) = entry {
                props.insert(property.to_string(), leaf_json(value));
            }
        }
        Value::Object(root)
    }
}

fn leaf_json(value: &LeafValue) -> Value {
    match value {
        LeafValue::Absent => Value::Null,
        LeafValue::Number(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
        LeafValue::Text(s) => Value::String(s.clone()),
        LeafValue::Color(c) => {
            let mut channels = Map::new();
            for (name, channel) in c.channels() {
                channels.insert(name.to_string(), Value::from(channel));
            }
            Value::Object(channels)
        }
    }
}

fn hash_string(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    hex::encode(hasher.finalize())
}
