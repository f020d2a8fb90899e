//! PixelProof Core - style fingerprint comparison
//!
//! This crate compares the style a design tool specifies for an element
//! against the style a browser actually rendered, including:
//! - The fingerprint schema (categories, typed leaf values) and JSON ingest
//! - Type-aware leaf equality with numeric and color tolerance
//! - Aggregation of two fingerprints into a match/mismatch report
//! - Normalization adapters for computed CSS and design-tool nodes
//! - Markdown rendering of comparison results

pub mod capture;
pub mod compare;
pub mod config;
pub mod errors;
pub mod fingerprint;
pub mod logging_facility;

// Re-export commonly used types
pub use compare::{compare, render_human_summary, Comparator, Comparison, DiffReport, KeyPolicy};
pub use config::{ComparatorConfig, PixelProofConfig};
pub use errors::{ExError, ExErrorKind, PixelProofError, Result};
pub use fingerprint::{Category, Color, Fingerprint, LeafValue};
