use pixelproof_core_types::RunId;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure raised at a PixelProof boundary (fingerprint ingest, config
/// loading, CLI I/O) maps to exactly one kind. Each kind carries a stable code
/// for programmatic handling and test assertions.
///
/// The comparison itself never produces an error: absent leaves and kind
/// mismatches are reported as ordinary mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Boundary/Validation
    InvalidInput,
    /// Capture output does not conform to the fingerprint schema
    InvalidFingerprint,
    /// A category outside spacing/typography/colors/border
    UnknownCategory,
    /// A color record with unknown keys or channels outside 0..=255
    InvalidColor,
    /// Comparator or file configuration failed validation
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidFingerprint => "ERR_INVALID_FINGERPRINT",
            ExErrorKind::UnknownCategory => "ERR_UNKNOWN_CATEGORY",
            ExErrorKind::InvalidColor => "ERR_INVALID_COLOR",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Built with a fluent API: `ExError::new(kind).with_op(..).with_message(..)`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    property: Option<String>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            property: None,
            run_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the offending property path (e.g. `colors.text`)
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Tag the error with the comparison run it belongs to
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(property) = &self.property {
            write!(f, " (property: {})", property)?;
        }
        if let Some(run_id) = &self.run_id {
            write!(f, " (run_id: {})", run_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised at the PixelProof boundaries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PixelProofError {
    /// Fingerprint JSON does not match the schema
    #[error("Invalid fingerprint: {reason}")]
    InvalidFingerprint { reason: String },

    /// Category name is not one of the fixed set
    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },

    /// Color record is malformed
    #[error("Invalid color at {property}: {reason}")]
    InvalidColor { property: String, reason: String },

    /// Tolerance is negative, NaN or infinite
    #[error("Invalid tolerance: {value}")]
    InvalidTolerance { value: f64 },

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Reading an input failed
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    /// Encoding an output failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<PixelProofError> for ExError {
    fn from(err: PixelProofError) -> Self {
        match err {
            PixelProofError::InvalidFingerprint { reason } => {
                ExError::new(ExErrorKind::InvalidFingerprint)
                    .with_message(format!("Invalid fingerprint: {}", reason))
            }

            PixelProofError::UnknownCategory { category } => {
                ExError::new(ExErrorKind::UnknownCategory)
                    .with_property(category.clone())
                    .with_message(format!("Unknown category '{}'", category))
            }

            PixelProofError::InvalidColor { property, reason } => {
                ExError::new(ExErrorKind::InvalidColor)
                    .with_property(property)
                    .with_message(reason)
            }

            PixelProofError::InvalidTolerance { value } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(format!(
                    "tolerance must be finite and non-negative, got {}",
                    value
                ))
            }

            PixelProofError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            PixelProofError::Io { path, reason } => ExError::new(ExErrorKind::Io)
                .with_message(format!("{}: {}", path, reason)),

            PixelProofError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for PixelProofError {
    fn from(err: serde_json::Error) -> Self {
        PixelProofError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        PixelProofError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::InvalidInput,
            ExErrorKind::InvalidFingerprint,
            ExErrorKind::UnknownCategory,
            ExErrorKind::InvalidColor,
            ExErrorKind::InvalidConfig,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_code_op_and_property() {
        let err = ExError::new(ExErrorKind::InvalidColor)
            .with_op("ingest_fingerprint")
            .with_property("colors.text")
            .with_message("channel out of range");
        let s = err.to_string();
        assert!(s.starts_with("[ERR_INVALID_COLOR]"));
        assert!(s.contains("ingest_fingerprint"));
        assert!(s.contains("colors.text"));
        assert!(s.contains("channel out of range"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk gone");
        let outer = ExError::new(ExErrorKind::InvalidInput).with_source(inner);
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::Io)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }

    #[test]
    fn test_tolerance_maps_to_invalid_config() {
        let err: ExError = PixelProofError::InvalidTolerance { value: -1.0 }.into();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
        assert!(err.message().contains("-1"));
    }
}
