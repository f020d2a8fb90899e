//! Style fingerprint comparator.
//!
//! Compares a design fingerprint against a rendered fingerprint and
//! partitions the design's properties into matches and mismatches.
//!
//! ## Entry point
//!
//! ```
//! use pixelproof_core::compare::{compare, render_human_summary};
//! use pixelproof_core::fingerprint::{Category, Fingerprint};
//!
//! let design = Fingerprint::new().with(Category::Typography, "fontSize", 16.0);
//! let rendered = Fingerprint::new().with(Category::Typography, "fontSize", 16.3);
//!
//! let comparison = compare(Some(&design), Some(&rendered));
//! assert_eq!(comparison.report().map(|r| r.matches.count), Some(1));
//! let summary = render_human_summary(&comparison);
//! assert!(summary.contains("typography.fontSize"));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical reports.
//! - **Design authority**: only design-side properties are visited; the
//!   rendered side is looked up per path.
//! - **Partition completeness**: every design property lands in exactly one
//!   of `matches` or `mismatches`.
//! - **Totality**: comparison never fails or panics; missing data is
//!   reported as mismatches or as [`Comparison::NothingToCompare`].

pub mod engine;
pub mod equality;
pub mod human_summary;
pub mod model;

pub use engine::{compare, Comparator};
pub use equality::{equal, DEFAULT_TOLERANCE};
pub use human_summary::render_human_summary;
pub use model::{
    Comparison, DiffReport, KeyPolicy, MatchPartition, Mismatch, MismatchPartition, MissingSide,
    PropertyKey, ReportIdentity,
};
