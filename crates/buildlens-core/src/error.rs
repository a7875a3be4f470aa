//! Unified error handling for BuildLens Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for BuildLens Core operations.
#[derive(Debug, Error, Clone)]
pub enum BuildLensError {
    /// Malformed host input.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Host or adapter failures.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl BuildLensError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in BuildLens".into(),
                "Please report this issue at: https://github.com/cosecruz/buildlens/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::MalformedInput => ErrorCategory::MalformedInput,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    MalformedInput,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type BuildLensResult<T> = Result<T, BuildLensError>;
