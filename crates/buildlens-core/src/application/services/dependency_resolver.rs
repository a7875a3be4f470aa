//! Dependency graph resolver.
//!
//! Turns the host's per-configuration resolution results into one
//! dependency tree rooted at the project:
//!
//! ```text
//! app (PROJECT)
//! ├── compileClasspath (CONFIGURATION)
//! │   └── org.slf4j:slf4j-api:2.0.9 (DEPENDENCY)
//! └── runtimeClasspath (CONFIGURATION)
//!     └── ...
//! ```
//!
//! Within one configuration a coordinate is expanded at most once. Every
//! later occurrence becomes a childless leaf, which breaks cycles and
//! flattens diamonds.

use std::collections::HashSet;

use tracing::{debug, instrument, trace};

use crate::{
    domain::{
        ComponentId, DependencyEdge, DependencyNode, DomainError, DomainValidator,
        HostConfiguration, ModelDiagnostics, ResolutionGraph,
    },
    error::BuildLensResult,
};

/// Builds a project's [`DependencyNode`] tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct DependencyGraphResolver;

impl DependencyGraphResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve every configuration of `project_name` into one tree.
    ///
    /// Non-resolvable configurations and unresolved edges are skipped and
    /// counted in `diagnostics`. A resolvable configuration whose graph is
    /// malformed fails the whole call.
    #[instrument(skip_all, fields(project = %project_name))]
    pub fn resolve(
        &self,
        project_name: &str,
        configurations: &[HostConfiguration],
        diagnostics: &mut ModelDiagnostics,
    ) -> BuildLensResult<DependencyNode> {
        let mut root = DependencyNode::project(project_name);

        for configuration in configurations {
            if !configuration.resolvable {
                debug!(configuration = %configuration.name, "skipping non-resolvable configuration");
                diagnostics.non_resolvable_configurations += 1;
                continue;
            }

            let node = self.resolve_configuration(project_name, configuration, diagnostics)?;
            if node.children().is_empty() {
                debug!(configuration = %configuration.name, "pruning empty configuration");
                diagnostics.empty_configurations_pruned += 1;
                continue;
            }
            root.add_child(node);
        }

        Ok(root)
    }

    /// Expand one resolvable configuration into a `Configuration` node.
    pub fn resolve_configuration(
        &self,
        project_name: &str,
        configuration: &HostConfiguration,
        diagnostics: &mut ModelDiagnostics,
    ) -> BuildLensResult<DependencyNode> {
        DomainValidator::validate_configuration(project_name, configuration)?;

        let graph = configuration
            .resolution
            .as_ref()
            .ok_or_else(|| DomainError::MissingResolution {
                project: project_name.to_string(),
                configuration: configuration.name.clone(),
            })?;
        let root_component = graph.require_root(project_name, &configuration.name)?;

        let mut walk = Walk {
            project: project_name,
            configuration: &configuration.name,
            graph,
            seen: HashSet::new(),
            diagnostics,
        };

        let mut node = DependencyNode::configuration(&configuration.name);
        for edge in &root_component.dependencies {
            if let Some(child) = walk.follow(edge)? {
                node.add_child(child);
            }
        }

        Ok(node)
    }
}

/// State of one configuration's expansion.
struct Walk<'a> {
    project: &'a str,
    configuration: &'a str,
    graph: &'a ResolutionGraph,
    /// Coordinates already expanded in this configuration.
    seen: HashSet<String>,
    diagnostics: &'a mut ModelDiagnostics,
}

impl Walk<'_> {
    fn follow(&mut self, edge: &DependencyEdge) -> Result<Option<DependencyNode>, DomainError> {
        match edge {
            DependencyEdge::Resolved { selected } => self.expand(*selected).map(Some),
            DependencyEdge::Unresolved { requested, reason } => {
                trace!(
                    requested = %requested,
                    reason = reason.as_deref().unwrap_or("unknown"),
                    "skipping unresolved dependency"
                );
                self.diagnostics.unresolved_edges += 1;
                Ok(None)
            }
        }
    }

    fn expand(&mut self, id: ComponentId) -> Result<DependencyNode, DomainError> {
        let component = self
            .graph
            .component(id)
            .ok_or_else(|| DomainError::DanglingComponent {
                project: self.project.to_string(),
                configuration: self.configuration.to_string(),
                component: id.to_string(),
            })?;
        let coordinate = component.coordinate.to_string();

        if !self.seen.insert(coordinate.clone()) {
            trace!(coordinate = %coordinate, "truncating revisited coordinate");
            self.diagnostics.truncated_revisits += 1;
            return Ok(DependencyNode::truncated(coordinate));
        }

        let mut node = DependencyNode::dependency(coordinate);
        for edge in &component.dependencies {
            if let Some(child) = self.follow(edge)? {
                node.add_child(child);
            }
        }
        Ok(node)
    }
}
