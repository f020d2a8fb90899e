//! Normalized style fingerprint schema.
//!
//! A [`Fingerprint`] is the shape both capture sides produce: a fixed set of
//! [`Category`]s, each mapping property names to a [`LeafValue`]. This module
//! has no dependency on the comparator.
//!
//! ## Entry points
//!
//! ```ignore
//! use pixelproof_core::fingerprint::{Category, Fingerprint, LeafValue};
//!
//! let fp = Fingerprint::new().with(Category::Typography, "fontSize", 16.0);
//! let parsed = Fingerprint::from_json_str(r#"{"typography":{"fontSize":16}}"#)?;
//! assert_eq!(fp, parsed);
//! ```

pub mod digest;
pub mod ingest;
pub mod model;

pub use ingest::parse_optional_fingerprint;
pub use model::{Category, Color, Fingerprint, LeafKind, LeafValue};
