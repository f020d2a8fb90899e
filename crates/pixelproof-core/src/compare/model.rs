//! Comparison output types.
//!
//! All report types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Property maps use `BTreeMap` keyed by [`PropertyKey`] for deterministic
//! serialization.

use crate::fingerprint::{Category, LeafValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How report entries are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Key by `category.property`; same-named properties never collide
    #[default]
    Namespaced,
    /// Key by bare property name; a later category overwrites an earlier
    /// entry of the same name within a partition (last write wins)
    Flat,
}

impl KeyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyPolicy::Namespaced => "namespaced",
            KeyPolicy::Flat => "flat",
        }
    }
}

impl std::str::FromStr for KeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "namespaced" => Ok(KeyPolicy::Namespaced),
            "flat" => Ok(KeyPolicy::Flat),
            other => Err(format!(
                "unknown key policy '{}', expected 'namespaced' or 'flat'",
                other
            )),
        }
    }
}

/// Key of a report entry.
///
/// Serializes as `"category.property"` when namespaced, or as the bare
/// property name under [`KeyPolicy::Flat`]. Property names never contain
/// `.` (ingest rejects them), so the string form parses back unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct PropertyKey {
    pub category: Option<Category>,
    pub property: String,
}

impl PropertyKey {
    pub fn namespaced(category: Category, property: impl Into<String>) -> Self {
        Self {
            category: Some(category),
            property: property.into(),
        }
    }

    pub fn flat(property: impl Into<String>) -> Self {
        Self {
            category: None,
            property: property.into(),
        }
    }

    pub fn for_policy(policy: KeyPolicy, category: Category, property: &str) -> Self {
        match policy {
            KeyPolicy::Namespaced => Self::namespaced(category, property),
            KeyPolicy::Flat => Self::flat(property),
        }
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.category {
            Some(category) => write!(f, "{}.{}", category, self.property),
            None => f.write_str(&self.property),
        }
    }
}

impl From<PropertyKey> for String {
    fn from(key: PropertyKey) -> Self {
        key.to_string()
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        if let Some((prefix, rest)) = s.split_once('.') {
            if let Ok(category) = prefix.parse::<Category>() {
                return PropertyKey::namespaced(category, rest);
            }
        }
        PropertyKey::flat(s)
    }
}

/// Design vs rendered values for a property that did not match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mismatch {
    /// Design-side value
    pub expected: LeafValue,
    /// Rendered-side value (`Absent` when the path is missing)
    pub actual: LeafValue,
}

/// Properties that agreed within tolerance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatchPartition {
    /// Number of compared properties that matched
    pub count: u64,
    /// Agreed values, recorded from the design side
    pub properties: BTreeMap<PropertyKey, LeafValue>,
}

/// Properties that diverged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MismatchPartition {
    /// Number of compared properties that did not match
    pub count: u64,
    pub properties: BTreeMap<PropertyKey, Mismatch>,
}

/// Digests of the two fingerprints a report was computed from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReportIdentity {
    pub design_digest: String,
    pub rendered_digest: String,
}

/// The categorized result of comparing two fingerprints.
///
/// `matches.count + mismatches.count` always equals the number of
/// properties in the design fingerprint. Under [`KeyPolicy::Flat`] the
/// property maps may hold fewer entries than the counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffReport {
    pub identity: ReportIdentity,
    /// Tolerance applied to numeric leaves and color channels
    pub tolerance: f64,
    pub key_policy: KeyPolicy,
    pub matches: MatchPartition,
    pub mismatches: MismatchPartition,
}

impl DiffReport {
    /// Number of properties compared
    pub fn total(&self) -> u64 {
        self.matches.count + self.mismatches.count
    }

    /// True when nothing diverged
    pub fn is_clean(&self) -> bool {
        self.mismatches.count == 0
    }
}

/// Which input was missing when no comparison could be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSide {
    Design,
    Rendered,
    Both,
}

impl MissingSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingSide::Design => "design",
            MissingSide::Rendered => "rendered",
            MissingSide::Both => "both",
        }
    }
}

/// Outcome of a comparison call.
///
/// `NothingToCompare` never carries a report, so it cannot be mistaken for
/// a zero/zero result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Comparison {
    Compared { report: DiffReport },
    NothingToCompare { missing: MissingSide },
}

impl Comparison {
    pub fn report(&self) -> Option<&DiffReport> {
        match self {
            Comparison::Compared { report } => Some(report),
            Comparison::NothingToCompare { .. } => None,
        }
    }

    pub fn into_report(self) -> Option<DiffReport> {
        match self {
            Comparison::Compared { report } => Some(report),
            Comparison::NothingToCompare { .. } => None,
        }
    }

    pub fn is_compared(&self) -> bool {
        matches!(self, Comparison::Compared { .. })
    }
}
