//! Correlation id for a single comparison run
//!
//! A run covers loading both fingerprints, comparing them and rendering the
//! result. Every log event and error raised along the way can carry the same
//! `RunId` so a run can be pulled out of interleaved logs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one comparison run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    /// Generate a fresh, time-ordered id (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reuse an id handed over by a caller (e.g. an extension message)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
