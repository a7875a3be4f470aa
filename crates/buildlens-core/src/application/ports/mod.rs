//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `buildlens-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `BuildHost` / `HostProject`: the host's project registry
//!   - `CapabilityDescriber`: type introspection for extension schemas
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`ModelAssembler::assemble`, called by the CLI layer)

pub mod output;

pub use output::{BuildHost, CapabilityDescriber, HostProject};

#[cfg(test)]
pub use output::MockCapabilityDescriber;
