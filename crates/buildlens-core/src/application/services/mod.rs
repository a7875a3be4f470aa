//! Application services - the model assembly engine.
//!
//! Leaves first: the resolver and closure extractor turn host data into model
//! pieces, the task collector feeds the per-invocation cache, the tree
//! builder recurses through projects, and the assembler drives one build.

pub mod closure_extractor;
pub mod context;
pub mod dependency_resolver;
pub mod model_assembler;
pub mod project_tree_builder;
pub mod task_collector;

pub use closure_extractor::CapabilityClosureExtractor;
pub use context::AssemblyContext;
pub use dependency_resolver::DependencyGraphResolver;
pub use model_assembler::{AssembledModel, ModelAssembler, reconcile_root_tasks};
pub use project_tree_builder::ProjectTreeBuilder;
pub use task_collector::TaskCollector;
