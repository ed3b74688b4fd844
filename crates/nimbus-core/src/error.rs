//! Unified error handling for Nimbus Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with categories for display styling and user-actionable suggestions.

use thiserror::Error;

use crate::application::EngineError;
use crate::domain::DomainError;

/// Root error type for Nimbus Core operations.
///
/// This enum wraps all possible errors that can occur when using nimbus-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum NimbusError {
    /// Errors from the domain layer (format and conflict violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (remote confirmation failures).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl NimbusError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Engine(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Nimbus".into(),
                "Please report this issue with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
            },
            Self::Engine(e) => match e.category() {
                crate::application::error::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::application::error::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::application::error::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::application::error::ErrorCategory::Lookup => ErrorCategory::Lookup,
            },
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Engine(e) if e.is_retryable())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Lookup,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type NimbusResult<T> = Result<T, NimbusError>;
