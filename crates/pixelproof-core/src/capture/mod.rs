//! Normalization adapters for both capture surfaces.
//!
//! - [`css`]: computed CSS strings from a rendered element
//! - [`design`]: a design-tool node description
//!
//! Both are pure single-pass field extraction. They produce the well-known
//! property names the comparator expects, so a design fingerprint and a
//! rendered fingerprint of the same element line up path by path.

pub mod css;
pub mod design;

pub use css::{parse_css_number, parse_css_rgb, rendered_fingerprint, ComputedStyle};
pub use design::{design_fingerprint, DesignNode};
