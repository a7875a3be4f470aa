//! BuildLens Core - Hexagonal Architecture Implementation
//!
//! This crate extracts a serializable model of a multi-project build from a
//! host's in-memory representation, for tooling clients (editors, IDEs) that
//! cannot reach the host's object graph themselves.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          buildlens-cli (CLI)            │
//! │     (Drives ModelAssembler)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ModelAssembler, ProjectTreeBuilder,   │
//! │   DependencyGraphResolver, ...)         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (BuildHost, HostProject, Describer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    buildlens-adapters (Infrastructure)  │
//! │     (SnapshotHost, TypeRegistry)        │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Data)        │
//! │ (ProjectNode, DependencyNode, TaskInfo) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use buildlens_core::application::ModelAssembler;
//!
//! // Adapters provide the host and the capability describer.
//! let assembler = ModelAssembler::new(host, describer);
//! let model = assembler.assemble().unwrap();
//! println!("{} tasks at the root", model.root.tasks.len());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AssembledModel, ModelAssembler,
        ports::{BuildHost, CapabilityDescriber, HostProject},
    };
    pub use crate::domain::{
        CapabilityClosure, DependencyKind, DependencyNode, ModelDiagnostics, ProjectNode, TaskInfo,
    };
    pub use crate::error::{BuildLensError, BuildLensResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
