// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for BuildLens.
//!
//! This module contains the model shapes and the host data they are built
//! from, with no I/O of its own. Reading from a live build host happens
//! through the ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: model assembly is synchronous
//! - **No I/O**: host data arrives already materialized
//! - **No external crates**: only std library + thiserror + serde derives
//! - **Immutable entities**: model nodes are Clone + PartialEq values
//!
// Public API - what the world sees
pub mod diagnostics;
pub mod entities;
pub mod error;
pub mod host;
pub mod task_cache;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    CapabilityClosure, DependencyNode, FieldDescriptor, MethodDescriptor, ProjectNode, TaskInfo,
};

pub use diagnostics::ModelDiagnostics;
pub use error::{DomainError, ErrorCategory};
pub use host::{
    DeclaredTask, DependencyEdge, ExtensionSchema, HostConfiguration, MemberField, MemberMethod,
    ResolutionGraph, ResolvedComponent, TypeDescription,
};
pub use task_cache::TaskCache;
pub use value_objects::{ComponentId, DependencyKind, ModuleCoordinate, task_path};

pub use validation::DomainValidator;
