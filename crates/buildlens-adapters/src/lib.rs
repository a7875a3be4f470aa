//! Infrastructure adapters for BuildLens.
//!
//! This crate implements the ports defined in `buildlens-core::application::ports`.
//! It contains all file I/O and document parsing.

pub mod snapshot;
pub mod types;

// Re-export commonly used adapters
pub use snapshot::{Snapshot, SnapshotFormat, SnapshotHost, SnapshotLoader, SnapshotProject};
pub use types::TypeRegistry;
