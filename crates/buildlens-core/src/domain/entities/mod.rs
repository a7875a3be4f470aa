pub mod closure;
pub mod dependency_node;
pub mod project_node;
pub mod task;

pub use closure::{CapabilityClosure, FieldDescriptor, MethodDescriptor};
pub use dependency_node::DependencyNode;
pub use project_node::ProjectNode;
pub use task::TaskInfo;
