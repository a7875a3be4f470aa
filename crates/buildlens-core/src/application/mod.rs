//! Application layer for BuildLens.
//!
//! This layer contains:
//! - **Services**: the model assembly engine (ModelAssembler and the pieces it drives)
//! - **Ports**: Interface definitions (traits) for the build host
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AssembledModel, AssemblyContext, CapabilityClosureExtractor, DependencyGraphResolver,
    ModelAssembler, ProjectTreeBuilder, TaskCollector,
};

// Re-export port traits (for adapter implementation)
pub use ports::{BuildHost, CapabilityDescriber, HostProject};

pub use error::ApplicationError;
