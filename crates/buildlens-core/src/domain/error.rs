// ============================================================================
// domain/error.rs - MALFORMED HOST INPUT
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are reserved for host input that is fundamentally malformed.
/// Expected gaps (unresolved edges, non-resolvable configurations, missing
/// subprojects) are omissions and never surface here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Resolution graph shape
    // ========================================================================
    #[error("configuration '{configuration}' of project '{project}' has no root component")]
    MissingRootComponent {
        project: String,
        configuration: String,
    },

    #[error(
        "configuration '{configuration}' of project '{project}' references unknown component {component}"
    )]
    DanglingComponent {
        project: String,
        configuration: String,
        component: String,
    },

    #[error(
        "configuration '{configuration}' of project '{project}' is resolvable but has no resolution result"
    )]
    MissingResolution {
        project: String,
        configuration: String,
    },

    // ========================================================================
    // Value parsing
    // ========================================================================
    #[error("invalid module coordinate '{value}', expected group:artifact:version")]
    InvalidCoordinate { value: String },

    #[error("invalid project path '{value}': {reason}")]
    InvalidProjectPath { value: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRootComponent { configuration, .. }
            | Self::MissingResolution { configuration, .. } => vec![
                format!("Resolve '{}' in the host before extracting the model", configuration),
                "Re-export the build snapshot after a successful configuration phase".into(),
            ],
            Self::DanglingComponent { component, .. } => vec![
                format!("Component {} is referenced but never declared", component),
                "Check that every dependency coordinate has a matching component entry".into(),
            ],
            Self::InvalidCoordinate { value } => vec![
                format!("'{}' is not a module coordinate", value),
                "Coordinates look like: org.slf4j:slf4j-api:2.0.9".into(),
            ],
            Self::InvalidProjectPath { .. } => vec![
                "Project paths start with ':' (e.g. ':', ':app', ':libs:core')".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCoordinate { .. } | Self::InvalidProjectPath { .. } => {
                ErrorCategory::Validation
            }
            Self::MissingRootComponent { .. }
            | Self::DanglingComponent { .. }
            | Self::MissingResolution { .. } => ErrorCategory::MalformedInput,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    MalformedInput,
}
