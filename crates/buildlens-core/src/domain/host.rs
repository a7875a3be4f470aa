//! Already-materialized host data the core reads.
//!
//! These are the shapes a build host hands over through the
//! [`HostProject`](crate::application::ports::HostProject) port. The core
//! never mutates them.

use serde::{Deserialize, Serialize};

use super::{ComponentId, DomainError, ModuleCoordinate};

// ============================================================================
// Configurations and resolution results
// ============================================================================

/// A named dependency configuration of one project.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfiguration {
    pub name: String,
    pub resolvable: bool,
    /// Resolution outcome. Only meaningful when `resolvable` is set.
    pub resolution: Option<ResolutionGraph>,
}

impl HostConfiguration {
    pub fn resolvable(name: impl Into<String>, resolution: ResolutionGraph) -> Self {
        Self {
            name: name.into(),
            resolvable: true,
            resolution: Some(resolution),
        }
    }

    pub fn non_resolvable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolvable: false,
            resolution: None,
        }
    }
}

/// Host-computed resolution result for one configuration.
///
/// Components live in an arena and edges point at them by [`ComponentId`], so
/// a cyclic module graph needs no reference cycles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionGraph {
    root: Option<ComponentId>,
    components: Vec<ResolvedComponent>,
}

impl ResolutionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component and return its id.
    pub fn add_component(&mut self, coordinate: ModuleCoordinate) -> ComponentId {
        let id = ComponentId(self.components.len());
        self.components.push(ResolvedComponent {
            coordinate,
            dependencies: Vec::new(),
        });
        id
    }

    pub fn set_root(&mut self, id: ComponentId) {
        self.root = Some(id);
    }

    /// Append a resolved edge `from -> to`.
    pub fn add_edge(&mut self, from: ComponentId, to: ComponentId) {
        if let Some(component) = self.components.get_mut(from.0) {
            component
                .dependencies
                .push(DependencyEdge::Resolved { selected: to });
        }
    }

    /// Append an edge from `from` that the host failed to resolve.
    pub fn add_unresolved(
        &mut self,
        from: ComponentId,
        requested: impl Into<String>,
        reason: Option<String>,
    ) {
        if let Some(component) = self.components.get_mut(from.0) {
            component.dependencies.push(DependencyEdge::Unresolved {
                requested: requested.into(),
                reason,
            });
        }
    }

    pub fn root(&self) -> Option<ComponentId> {
        self.root
    }

    pub fn component(&self, id: ComponentId) -> Option<&ResolvedComponent> {
        self.components.get(id.0)
    }

    pub fn components(&self) -> &[ResolvedComponent] {
        &self.components
    }

    /// Root component, failing if the host left it unset or dangling.
    pub fn require_root(
        &self,
        project: &str,
        configuration: &str,
    ) -> Result<&ResolvedComponent, DomainError> {
        let id = self.root.ok_or_else(|| DomainError::MissingRootComponent {
            project: project.to_string(),
            configuration: configuration.to_string(),
        })?;
        self.component(id)
            .ok_or_else(|| DomainError::DanglingComponent {
                project: project.to_string(),
                configuration: configuration.to_string(),
                component: id.to_string(),
            })
    }
}

/// One selected module version inside a [`ResolutionGraph`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComponent {
    pub coordinate: ModuleCoordinate,
    pub dependencies: Vec<DependencyEdge>,
}

/// Outgoing dependency edge of a component.
#[derive(Debug, Clone, PartialEq)]
pub enum DependencyEdge {
    Resolved {
        selected: ComponentId,
    },
    Unresolved {
        requested: String,
        reason: Option<String>,
    },
}

// ============================================================================
// Plugins, extensions, tasks
// ============================================================================

/// A capability surface contributed to a project by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSchema {
    pub name: String,
    /// Concrete type name handed to the [`CapabilityDescriber`](crate::application::ports::CapabilityDescriber).
    #[serde(rename = "type")]
    pub capability_type: String,
}

impl ExtensionSchema {
    pub fn new(name: impl Into<String>, capability_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capability_type: capability_type.into(),
        }
    }
}

/// A task as declared in a project's task registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredTask {
    pub name: String,
    pub group: Option<String>,
    pub path: String,
    pub description: Option<String>,
}

// ============================================================================
// Capability type descriptions
// ============================================================================

/// Members of a capability type as enumerated by the host's introspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescription {
    #[serde(default)]
    pub methods: Vec<MemberMethod>,
    #[serde(default)]
    pub fields: Vec<MemberField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberMethod {
    pub name: String,
    #[serde(default, rename = "parameters")]
    pub parameter_types: Vec<String>,
    #[serde(default = "default_true")]
    pub public: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub deprecated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberField {
    pub name: String,
    #[serde(default = "default_true")]
    pub public: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub deprecated: bool,
}

fn default_true() -> bool {
    true
}
