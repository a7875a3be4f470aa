use crate::domain::{DependencyEdge, DomainError, HostConfiguration, ResolutionGraph};

/// Centralized validation of host input.
///
/// Runs before a configuration is walked so a malformed graph fails the whole
/// build instead of producing a half-expanded tree.
pub struct DomainValidator;

impl DomainValidator {
    /// Resolvable configurations must carry a resolution result whose root and
    /// every resolved edge point inside the graph.
    pub fn validate_configuration(
        project: &str,
        configuration: &HostConfiguration,
    ) -> Result<(), DomainError> {
        if !configuration.resolvable {
            return Ok(());
        }
        let graph = configuration
            .resolution
            .as_ref()
            .ok_or_else(|| DomainError::MissingResolution {
                project: project.to_string(),
                configuration: configuration.name.clone(),
            })?;
        Self::validate_resolution_graph(project, &configuration.name, graph)
    }

    pub fn validate_resolution_graph(
        project: &str,
        configuration: &str,
        graph: &ResolutionGraph,
    ) -> Result<(), DomainError> {
        graph.require_root(project, configuration)?;

        for component in graph.components() {
            for edge in &component.dependencies {
                if let DependencyEdge::Resolved { selected } = edge {
                    if graph.component(*selected).is_none() {
                        return Err(DomainError::DanglingComponent {
                            project: project.to_string(),
                            configuration: configuration.to_string(),
                            component: selected.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
