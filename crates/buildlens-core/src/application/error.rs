//! Application layer errors.
//!
//! These errors represent failures in reaching or reading the host, not
//! malformed host data. Malformed data is `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to adapters.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The host has no build root to start from.
    #[error("Build host has no root project")]
    MissingRootProject,

    /// A project path was requested that the host does not know.
    #[error("Project not found: {path}")]
    ProjectNotFound { path: String },

    /// Snapshot could not be read from disk.
    #[error("Failed to read snapshot {path}: {reason}")]
    SnapshotUnreadable { path: PathBuf, reason: String },

    /// Snapshot was read but is not a valid document.
    #[error("Failed to parse snapshot {path}: {reason}")]
    SnapshotInvalid { path: PathBuf, reason: String },

    /// Snapshot declares the same project path twice.
    #[error("Duplicate project path in snapshot: {path}")]
    DuplicateProject { path: String },

    /// Snapshot format could not be inferred.
    #[error("Unsupported snapshot format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRootProject => vec![
                "The snapshot must name its build root with `root = \":\"`".into(),
                "Ensure a [[projects]] entry exists for that path".into(),
            ],
            Self::ProjectNotFound { path } => vec![
                format!("No project at path '{}'", path),
                "Try: buildlens model <SNAPSHOT> --format tree to see every project path".into(),
            ],
            Self::SnapshotUnreadable { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::SnapshotInvalid { reason, .. } => vec![
                format!("Parser said: {}", reason),
                "Compare the document against the snapshot format in the README".into(),
            ],
            Self::DuplicateProject { path } => vec![
                format!("Remove the second [[projects]] entry for '{}'", path),
            ],
            Self::UnsupportedFormat { .. } => vec![
                "Snapshots must end in .toml or .json".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRootProject
            | Self::ProjectNotFound { .. }
            | Self::SnapshotUnreadable { .. } => ErrorCategory::NotFound,
            Self::SnapshotInvalid { .. }
            | Self::DuplicateProject { .. }
            | Self::UnsupportedFormat { .. } => ErrorCategory::Validation,
        }
    }
}
