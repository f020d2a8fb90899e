//! Comparator and tool configuration.
//!
//! Configuration is plain serde data. Every field has a default, so an empty
//! TOML file is a valid configuration:
//!
//! ```toml
//! [comparator]
//! tolerance = 1.0
//! key_policy = "flat"
//!
//! [logging]
//! profile = "production"
//! ```

use crate::compare::{KeyPolicy, DEFAULT_TOLERANCE};
use crate::errors::{ExError, ExErrorKind, PixelProofError, Result};
use crate::logging_facility::Profile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for a [`Comparator`](crate::compare::Comparator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Absolute tolerance for numbers and color channels
    pub tolerance: f64,
    /// How report entries are keyed
    pub key_policy: KeyPolicy,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            key_policy: KeyPolicy::default(),
        }
    }
}

impl ComparatorConfig {
    /// Check that the tolerance is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the tolerance is negative, NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ExError::from(PixelProofError::InvalidTolerance {
                value: self.tolerance,
            })
            .with_op("validate_config"));
        }
        Ok(())
    }
}

/// Logging settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub profile: Profile,
}

/// File-level configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelProofConfig {
    pub comparator: ComparatorConfig,
    pub logging: LoggingConfig,
}

impl PixelProofConfig {
    /// Parse and validate TOML configuration text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on malformed TOML, unknown enum values or an
    /// invalid tolerance.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| {
            ExError::from(PixelProofError::InvalidConfig {
                reason: e.to_string(),
            })
            .with_op("load_config")
        })?;
        config.comparator.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as
    /// [`PixelProofConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExError::from(PixelProofError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
            .with_op("load_config")
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("save_config")
                .with_message(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = PixelProofConfig::from_toml_str("").unwrap();
        assert_eq!(config, PixelProofConfig::default());
        assert_eq!(config.comparator.tolerance, 0.5);
        assert_eq!(config.comparator.key_policy, KeyPolicy::Namespaced);
        assert_eq!(config.logging.profile, Profile::Development);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = PixelProofConfig::from_toml_str(
            r#"
            [comparator]
            key_policy = "flat"
            "#,
        )
        .unwrap();
        assert_eq!(config.comparator.key_policy, KeyPolicy::Flat);
        assert_eq!(config.comparator.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PixelProofConfig {
            comparator: ComparatorConfig {
                tolerance: 1.25,
                key_policy: KeyPolicy::Flat,
            },
            logging: LoggingConfig {
                profile: Profile::Production,
            },
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(PixelProofConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let err = PixelProofConfig::from_toml_str("[comparator]\ntolerance = -1.0\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    }

    #[test]
    fn test_unknown_key_policy_rejected() {
        let err =
            PixelProofConfig::from_toml_str("[comparator]\nkey_policy = \"nested\"\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
        assert_eq!(err.op(), Some("load_config"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = PixelProofConfig::load(Path::new("/nonexistent/pixelproof.toml")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
    }
}
