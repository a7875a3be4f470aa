//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the model assembler reads from the build host.
//! The `buildlens-adapters` crate provides implementations.

use std::path::Path;
use std::path::PathBuf;

use crate::domain::{DeclaredTask, ExtensionSchema, HostConfiguration, TypeDescription};

/// Port for the build host's project registry.
///
/// Implemented by:
/// - `buildlens_adapters::snapshot::SnapshotHost` (snapshot files, tests)
///
/// ## Design Notes
///
/// - Lookups return `None` for unknown paths; the core treats that as an
///   absent project reference and skips the subtree
/// - Read-only: the core never mutates host state
pub trait BuildHost: Send + Sync {
    /// The build root, `None` if the host has not configured one.
    fn root(&self) -> Option<&dyn HostProject>;

    /// Look up a project by its path (`:`, `:app`, `:libs:core`).
    fn project(&self, path: &str) -> Option<&dyn HostProject>;
}

/// One configured project as the host sees it.
///
/// Every collection is returned in host iteration order.
pub trait HostProject: Send + Sync {
    fn name(&self) -> &str;

    /// Project path within the build (`:` for the root).
    fn path(&self) -> &str;

    /// Absolute project directory.
    fn directory(&self) -> &Path;

    /// Path of the parent project, `None` for the build root.
    fn parent_path(&self) -> Option<&str>;

    /// Build-script source file. May be relative to [`Self::directory`].
    fn build_file(&self) -> &Path;

    /// Raw build-script classpath entries. May be relative to [`Self::directory`].
    fn script_classpath(&self) -> &[PathBuf];

    fn configurations(&self) -> &[HostConfiguration];

    /// Applied plugin identifiers, duplicates preserved.
    fn plugins(&self) -> &[String];

    fn extension_schemas(&self) -> &[ExtensionSchema];

    /// Locally declared tasks in declaration order.
    fn tasks(&self) -> &[DeclaredTask];

    /// Paths of direct subprojects.
    fn subproject_paths(&self) -> &[String];
}

/// Port for capability type introspection.
///
/// Implemented by:
/// - `buildlens_adapters::types::TypeRegistry` (static descriptions)
#[cfg_attr(test, mockall::automock)]
pub trait CapabilityDescriber: Send + Sync {
    /// Describe the members of `capability_type`, `None` if it is unknown.
    fn describe(&self, capability_type: &str) -> Option<TypeDescription>;
}
