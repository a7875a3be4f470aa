//! Build snapshots: a materialized build hierarchy read from disk.
//!
//! A snapshot stands in for a live build host. It lists every configured
//! project with its resolution results, plugins, extension schemas and
//! tasks, plus descriptions of the capability types those schemas name.
//!
//! # `snapshot.toml` format
//!
//! ```toml
//! root = ":"                          # project path of the build root
//!
//! [[projects]]
//! path        = ":app"
//! name        = "app"
//! directory   = "app"                 # optional; relative to the snapshot
//! build_file  = "build.gradle.kts"    # optional; default build.gradle
//! script_classpath = ["libs/plugin.jar"]
//! plugins     = ["java", "application"]
//! subprojects = []
//!
//! [[projects.extensions]]
//! name = "application"
//! type = "org.example.ApplicationExtension"
//!
//! [[projects.tasks]]
//! name        = "run"
//! group       = "application"         # optional
//! description = "Runs the app"        # optional
//! # path      = ":app:run"            # optional; derived from project path
//!
//! [[projects.configurations]]
//! name       = "runtimeClasspath"
//! resolvable = true                   # optional; default true
//! root       = "demo:app:"            # optional; default first component
//!
//! [[projects.configurations.components]]
//! coordinate   = "demo:app:"
//! dependencies = ["com.a:a:1"]
//! unresolved   = ["com.b:b:2", { requested = "com.c:c:3", reason = "timeout" }]
//!
//! [[types]]
//! name = "org.example.ApplicationExtension"
//! methods = [{ name = "getMainClass", abstract = true }]
//! fields  = [{ name = "DEFAULT", static = true }]
//! ```
//!
//! The JSON encoding uses the same keys.

pub mod host;
pub mod loader;
pub mod manifest;

pub use host::{SnapshotHost, SnapshotProject};
pub use loader::{Snapshot, SnapshotFormat, SnapshotLoader};
pub use manifest::SnapshotManifest;
