//! Fingerprint comparison engine.
//!
//! The entry point is [`Comparator::compare`] (or the free [`compare`] with
//! default settings), which walks the design fingerprint and partitions its
//! properties into matches and mismatches against the rendered fingerprint.

use crate::compare::equality::{equal, DEFAULT_TOLERANCE};
use crate::compare::model::{
    Comparison, DiffReport, KeyPolicy, MatchPartition, Mismatch, MismatchPartition, MissingSide,
    PropertyKey, ReportIdentity,
};
use crate::config::ComparatorConfig;
use crate::errors::ExError;
use crate::fingerprint::{Fingerprint, LeafValue};
use crate::{log_op_end, log_op_start};

const OP: &str = "compare";

/// A configured, stateless comparator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparator {
    tolerance: f64,
    key_policy: KeyPolicy,
}

impl Default for Comparator {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            key_policy: KeyPolicy::default(),
        }
    }
}

impl Comparator {
    /// Build a comparator from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the tolerance is negative, NaN or infinite.
    pub fn new(config: ComparatorConfig) -> Result<Self, ExError> {
        config.validate()?;
        Ok(Self {
            tolerance: config.tolerance,
            key_policy: config.key_policy,
        })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn key_policy(&self) -> KeyPolicy {
        self.key_policy
    }

    /// Compare a design fingerprint against a rendered one.
    ///
    /// Returns [`Comparison::NothingToCompare`] when either side is missing.
    /// Only properties present in the design fingerprint are visited; a path
    /// missing on the rendered side compares as [`LeafValue::Absent`].
    pub fn compare(
        &self,
        design: Option<&Fingerprint>,
        rendered: Option<&Fingerprint>,
    ) -> Comparison {
        log_op_start!(
            OP,
            tolerance = self.tolerance,
            key_policy = self.key_policy.as_str()
        );
        let start = std::time::Instant::now();

        let (design, rendered) = match (design, rendered) {
            (Some(d), Some(r)) => (d, r),
            (d, r) => {
                let missing = match (d, r) {
                    (None, None) => MissingSide::Both,
                    (None, Some(_)) => MissingSide::Design,
                    _ => MissingSide::Rendered,
                };
                log_op_end!(
                    OP,
                    duration_ms = start.elapsed().as_millis() as u64,
                    missing = missing.as_str()
                );
                return Comparison::NothingToCompare { missing };
            }
        };

        let report = self.build_report(design, rendered);

        log_op_end!(
            OP,
            duration_ms = start.elapsed().as_millis() as u64,
            matches = report.matches.count,
            mismatches = report.mismatches.count
        );

        Comparison::Compared { report }
    }

    fn build_report(&self, design: &Fingerprint, rendered: &Fingerprint) -> DiffReport {
        let mut matches = MatchPartition::default();
        let mut mismatches = MismatchPartition::default();

        for (category, property, expected) in design.iter() {
            let actual = rendered
                .get(category, property)
                .cloned()
                .unwrap_or(LeafValue::Absent);
            let key = PropertyKey::for_policy(self.key_policy, category, property);

            if equal(expected, &actual, self.tolerance) {
                matches.count += 1;
                matches.properties.insert(key, expected.clone());
            } else {
                tracing::debug!(
                    component = module_path!(),
                    op = OP,
                    category = category.as_str(),
                    property = property,
                    expected_kind = expected.kind().as_str(),
                    actual_kind = actual.kind().as_str(),
                    "property mismatch"
                );
                mismatches.count += 1;
                mismatches.properties.insert(
                    key,
                    Mismatch {
                        expected: expected.clone(),
                        actual,
                    },
                );
            }
        }

        DiffReport {
            identity: ReportIdentity {
                design_digest: design.digest(),
                rendered_digest: rendered.digest(),
            },
            tolerance: self.tolerance,
            key_policy: self.key_policy,
            matches,
            mismatches,
        }
    }
}

/// Compare with [`DEFAULT_TOLERANCE`] and namespaced keys.
pub fn compare(design: Option<&Fingerprint>, rendered: Option<&Fingerprint>) -> Comparison {
    Comparator::default().compare(design, rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::{Category, Color};

    fn typography(size: f64, weight: f64) -> Fingerprint {
        Fingerprint::new()
            .with(Category::Typography, "fontSize", size)
            .with(Category::Typography, "fontWeight", weight)
    }

    #[test]
    fn test_typography_scenario() {
        let design = typography(16.0, 400.0);
        let rendered = typography(16.3, 700.0);

        let comparison = compare(Some(&design), Some(&rendered));
        let report = comparison.report().unwrap();

        assert_eq!(report.matches.count, 1);
        assert_eq!(report.mismatches.count, 1);
        assert_eq!(
            report
                .matches
                .properties
                .get(&PropertyKey::namespaced(Category::Typography, "fontSize")),
            Some(&LeafValue::Number(16.0))
        );
        assert_eq!(
            report
                .mismatches
                .properties
                .get(&PropertyKey::namespaced(Category::Typography, "fontWeight")),
            Some(&Mismatch {
                expected: LeafValue::Number(400.0),
                actual: LeafValue::Number(700.0),
            })
        );
    }

    #[test]
    fn test_missing_sides() {
        let fp = typography(16.0, 400.0);
        assert_eq!(
            compare(None, Some(&fp)),
            Comparison::NothingToCompare {
                missing: MissingSide::Design
            }
        );
        assert_eq!(
            compare(Some(&fp), None),
            Comparison::NothingToCompare {
                missing: MissingSide::Rendered
            }
        );
        assert_eq!(
            compare(None, None),
            Comparison::NothingToCompare {
                missing: MissingSide::Both
            }
        );
    }

    #[test]
    fn test_missing_rendered_path_is_absent_mismatch() {
        let design = Fingerprint::new().with(Category::Colors, "text", Color::new(0, 0, 0));
        let rendered = Fingerprint::new();

        let report = compare(Some(&design), Some(&rendered))
            .into_report()
            .unwrap();
        let entry = report
            .mismatches
            .properties
            .get(&PropertyKey::namespaced(Category::Colors, "text"))
            .unwrap();
        assert_eq!(entry.actual, LeafValue::Absent);
    }

    #[test]
    fn test_rendered_only_properties_are_ignored() {
        let design = Fingerprint::new().with(Category::Border, "radius", 4.0);
        let rendered = Fingerprint::new()
            .with(Category::Border, "radius", 4.0)
            .with(Category::Spacing, "marginTop", 12.0);

        let report = compare(Some(&design), Some(&rendered))
            .into_report()
            .unwrap();
        assert_eq!(report.total(), 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_empty_design_yields_empty_report() {
        let report = compare(Some(&Fingerprint::new()), Some(&typography(1.0, 1.0)))
            .into_report()
            .unwrap();
        assert_eq!(report.total(), 0);
        assert!(report.matches.properties.is_empty());
        assert!(report.mismatches.properties.is_empty());
    }

    #[test]
    fn test_flat_policy_last_write_wins_but_counts_everything() {
        let comparator = Comparator::new(ComparatorConfig {
            tolerance: DEFAULT_TOLERANCE,
            key_policy: KeyPolicy::Flat,
        })
        .unwrap();

        // "width" in spacing and border: border is enumerated last
        let design = Fingerprint::new()
            .with(Category::Spacing, "width", 1.0)
            .with(Category::Border, "width", 2.0);
        let rendered = Fingerprint::new();

        let report = comparator
            .compare(Some(&design), Some(&rendered))
            .into_report()
            .unwrap();
        assert_eq!(report.mismatches.count, 2);
        assert_eq!(report.mismatches.properties.len(), 1);
        assert_eq!(
            report
                .mismatches
                .properties
                .get(&PropertyKey::flat("width"))
                .map(|m| m.expected.clone()),
            Some(LeafValue::Number(2.0))
        );
    }

    #[test]
    fn test_namespaced_policy_keeps_same_named_properties_apart() {
        let design = Fingerprint::new()
            .with(Category::Spacing, "width", 1.0)
            .with(Category::Border, "width", 2.0);

        let report = compare(Some(&design), Some(&design.clone()))
            .into_report()
            .unwrap();
        assert_eq!(report.matches.count, 2);
        assert_eq!(report.matches.properties.len(), 2);
    }

    #[test]
    fn test_report_identity_carries_digests() {
        let design = typography(16.0, 400.0);
        let rendered = typography(16.0, 700.0);
        let report = compare(Some(&design), Some(&rendered))
            .into_report()
            .unwrap();
        assert_eq!(report.identity.design_digest, design.digest());
        assert_eq!(report.identity.rendered_digest, rendered.digest());
        assert_ne!(report.identity.design_digest, report.identity.rendered_digest);
    }

    #[test]
    fn test_report_identity_is_never_empty() {
        let design = Fingerprint::new().with(Category::Border, "radius", f64::NAN);
        let report = compare(Some(&design), Some(&Fingerprint::new()))
            .into_report()
            .unwrap();
        assert_eq!(report.identity.design_digest.len(), 64);
        assert_eq!(report.identity.rendered_digest.len(), 64);
    }

    #[test]
    fn test_new_rejects_bad_tolerance() {
        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            let err = Comparator::new(ComparatorConfig {
                tolerance: bad,
                key_policy: KeyPolicy::Namespaced,
            })
            .unwrap_err();
            assert_eq!(err.kind(), crate::errors::ExErrorKind::InvalidConfig);
        }
    }

    #[test]
    fn test_custom_tolerance_applies() {
        let comparator = Comparator::new(ComparatorConfig {
            tolerance: 2.0,
            key_policy: KeyPolicy::Namespaced,
        })
        .unwrap();
        let report = comparator
            .compare(Some(&typography(16.0, 400.0)), Some(&typography(17.5, 401.0)))
            .into_report()
            .unwrap();
        assert_eq!(report.matches.count, 2);
        assert_eq!(report.tolerance, 2.0);
    }
}
