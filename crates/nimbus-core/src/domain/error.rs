use thiserror::Error;

/// Domain-level validation error.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Format violations, missing counterparts, and conflicting options are
/// separate variants so the CLI can style and exit-code them differently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Format Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid value for '{param}': {reason}")]
    InvalidFormat { param: String, reason: String },

    // ========================================================================
    // Cross-parameter Conflicts (409-level equivalent)
    // ========================================================================
    #[error("'{present}' requires '{missing}' to be provided as well")]
    MissingCounterpart { present: String, missing: String },

    #[error("the options {options:?} are mutually exclusive")]
    ConflictingOptions { options: Vec<String> },
}

impl DomainError {
    /// Shorthand for the most common case.
    pub fn invalid_format(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFormat { param, reason } => vec![
                format!("Check the value passed to '{}'", param),
                format!("Expected: {}", reason),
            ],
            Self::MissingCounterpart { present, missing } => vec![format!(
                "Provide '{}' alongside '{}', or drop both",
                missing, present
            )],
            Self::ConflictingOptions { options } => vec![
                format!("Pass at most one of: {}", options.join(", ")),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFormat { .. } => ErrorCategory::Validation,
            Self::MissingCounterpart { .. } | Self::ConflictingOptions { .. } => {
                ErrorCategory::Conflict
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
}
