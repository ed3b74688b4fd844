//! Application layer errors.
//!
//! These errors represent failures in remote confirmation, not format
//! violations. Format errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::DomainError;

/// Errors produced while the engine validates a parameter bag.
///
/// Local format/conflict violations pass through as `Domain`; the other
/// variants come from remote confirmation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// A local format or cross-parameter violation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The lookup itself could not be performed (transport, auth, 5xx).
    #[error("remote lookup failed: {reason}")]
    LookupFailed { reason: String },

    /// A project reference resolved to nothing.
    #[error("no project matching '{identifier}' found for '{param}'")]
    ProjectNotFound { param: String, identifier: String },

    /// The requested deployment name is already taken.
    #[error("deployment name '{name}' is unavailable: {message}")]
    NameUnavailable { name: String, message: String },

    /// The requested release tag does not exist in the repository.
    #[error("version '{version}' not found in releases of '{repository}'")]
    VersionNotFound { version: String, repository: String },
}

impl EngineError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::LookupFailed { reason } => vec![
                format!("The platform could not be reached: {}", reason),
                "Check your network connection and base URL, then retry".into(),
            ],
            Self::ProjectNotFound { identifier, .. } => vec![
                format!("No project named '{}' exists", identifier),
                "List projects to see valid names and ids".into(),
            ],
            Self::NameUnavailable { message, .. } => vec![
                message.clone(),
                "Choose a different deployment name".into(),
            ],
            Self::VersionNotFound { repository, .. } => vec![format!(
                "Check the published release tags of '{}'",
                repository
            )],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
            },
            Self::LookupFailed { .. } => ErrorCategory::Lookup,
            Self::ProjectNotFound { .. } | Self::VersionNotFound { .. } => ErrorCategory::NotFound,
            Self::NameUnavailable { .. } => ErrorCategory::Validation,
        }
    }

    /// Whether retrying the same invocation could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LookupFailed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Lookup,
}
