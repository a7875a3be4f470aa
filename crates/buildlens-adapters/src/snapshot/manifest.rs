//! Deserialised shape of a build snapshot document.
//!
//! The same structs back both the TOML and the JSON encoding; see the
//! [module docs](super) for a full example.

use std::{collections::HashMap, path::PathBuf};

use serde::Deserialize;

use buildlens_core::{
    domain::{
        ComponentId, DomainError, ExtensionSchema, HostConfiguration, MemberField, MemberMethod,
        ModuleCoordinate, ResolutionGraph, TypeDescription,
    },
    error::BuildLensResult,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Top-level snapshot document.
#[derive(Debug, Deserialize, Clone)]
pub struct SnapshotManifest {
    /// Project path of the build root.
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    /// Capability type descriptions for the type registry.
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

/// One entry under `[[projects]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct ProjectEntry {
    /// Project path, e.g. `":"` or `":libs:core"`.
    pub path: String,
    pub name: String,
    /// Project directory. Relative values are resolved against the snapshot's
    /// directory; when omitted the path segments are used (`:libs:core` ->
    /// `libs/core`).
    pub directory: Option<PathBuf>,
    /// Build script, relative to the project directory unless absolute.
    /// Defaults to `build.gradle`.
    pub build_file: Option<PathBuf>,
    #[serde(default)]
    pub script_classpath: Vec<PathBuf>,
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Paths of direct subprojects, in host iteration order.
    #[serde(default)]
    pub subprojects: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<ExtensionSchema>,
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
    #[serde(default)]
    pub configurations: Vec<ConfigurationEntry>,
}

/// One entry under `[[projects.tasks]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct TaskEntry {
    pub name: String,
    pub group: Option<String>,
    pub description: Option<String>,
    /// Full task path. Defaults to `<project path>:<name>`.
    pub path: Option<String>,
}

/// One entry under `[[projects.configurations]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct ConfigurationEntry {
    pub name: String,
    #[serde(default = "default_true")]
    pub resolvable: bool,
    /// Coordinate of the root component. Defaults to the first component.
    pub root: Option<String>,
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// One selected component of a configuration's resolution result.
#[derive(Debug, Deserialize, Clone)]
pub struct ComponentEntry {
    pub coordinate: String,
    /// Coordinates of the components this one depends on. Each must be
    /// declared as a component of the same configuration.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub unresolved: Vec<UnresolvedEntry>,
}

/// A dependency the host failed to resolve, either as a bare requested
/// notation or with a failure reason.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum UnresolvedEntry {
    Requested(String),
    Detailed {
        requested: String,
        reason: Option<String>,
    },
}

/// One entry under `[[types]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct TypeEntry {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MemberMethod>,
    #[serde(default)]
    pub fields: Vec<MemberField>,
}

fn default_root() -> String {
    ":".to_string()
}

fn default_true() -> bool {
    true
}

// ── Conversion to host data ───────────────────────────────────────────────────

impl TypeEntry {
    pub fn description(&self) -> TypeDescription {
        TypeDescription {
            methods: self.methods.clone(),
            fields: self.fields.clone(),
        }
    }
}

impl ConfigurationEntry {
    /// Build the host configuration, turning the component list into a
    /// resolution graph.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidCoordinate`] for a malformed coordinate
    /// - [`DomainError::DanglingComponent`] when a dependency or the root names
    ///   a coordinate that is not declared as a component
    pub fn to_host(&self, project: &str) -> BuildLensResult<HostConfiguration> {
        if !self.resolvable {
            return Ok(HostConfiguration::non_resolvable(&self.name));
        }

        let dangling = |component: &str| DomainError::DanglingComponent {
            project: project.to_string(),
            configuration: self.name.clone(),
            component: component.to_string(),
        };

        let mut graph = ResolutionGraph::new();
        let mut ids: HashMap<String, ComponentId> = HashMap::new();
        let mut declared = Vec::with_capacity(self.components.len());

        for component in &self.components {
            let coordinate: ModuleCoordinate = component.coordinate.parse()?;
            let key = coordinate.to_string();
            let id = graph.add_component(coordinate);
            ids.entry(key).or_insert(id);
            declared.push(id);
        }

        let lookup = |raw: &str| -> BuildLensResult<ComponentId> {
            let coordinate: ModuleCoordinate = raw.parse()?;
            ids.get(&coordinate.to_string())
                .copied()
                .ok_or_else(|| dangling(raw).into())
        };

        for (component, &from) in self.components.iter().zip(&declared) {
            for dependency in &component.dependencies {
                let to = lookup(dependency)?;
                graph.add_edge(from, to);
            }
            for unresolved in &component.unresolved {
                let (requested, reason) = match unresolved {
                    UnresolvedEntry::Requested(requested) => (requested.clone(), None),
                    UnresolvedEntry::Detailed { requested, reason } => {
                        (requested.clone(), reason.clone())
                    }
                };
                graph.add_unresolved(from, requested, reason);
            }
        }

        let root = match &self.root {
            Some(raw) => Some(lookup(raw)?),
            None => declared.first().copied(),
        };
        if let Some(root) = root {
            graph.set_root(root);
        }

        Ok(HostConfiguration::resolvable(&self.name, graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildlens_core::{domain::DependencyEdge, error::BuildLensError};

    fn configuration(toml_src: &str) -> ConfigurationEntry {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn components_become_an_arena_graph() {
        let entry = configuration(
            r#"
            name = "runtimeClasspath"

            [[components]]
            coordinate = "demo:app:"
            dependencies = ["com.a:a:1"]

            [[components]]
            coordinate = "com.a:a:1"
            dependencies = ["demo:app:"]
            unresolved = ["com.missing:x:1", { requested = "com.b:b:2", reason = "not found" }]
            "#,
        );

        let host = entry.to_host(":app").unwrap();
        assert!(host.resolvable);
        let graph = host.resolution.unwrap();
        assert_eq!(graph.root(), Some(ComponentId(0)));
        assert_eq!(graph.components().len(), 2);

        let a = graph.component(ComponentId(1)).unwrap();
        assert_eq!(
            a.dependencies,
            vec![
                DependencyEdge::Resolved { selected: ComponentId(0) },
                DependencyEdge::Unresolved {
                    requested: "com.missing:x:1".into(),
                    reason: None
                },
                DependencyEdge::Unresolved {
                    requested: "com.b:b:2".into(),
                    reason: Some("not found".into())
                },
            ]
        );
    }

    #[test]
    fn explicit_root_overrides_first_component() {
        let entry = configuration(
            r#"
            name = "compileClasspath"
            root = "demo:lib:"

            [[components]]
            coordinate = "com.a:a:1"

            [[components]]
            coordinate = "demo:lib:"
            dependencies = ["com.a:a:1"]
            "#,
        );

        let graph = entry.to_host(":lib").unwrap().resolution.unwrap();
        assert_eq!(graph.root(), Some(ComponentId(1)));
    }

    #[test]
    fn non_resolvable_ignores_components() {
        let entry = configuration(
            r#"
            name = "implementation"
            resolvable = false

            [[components]]
            coordinate = "not a coordinate"
            "#,
        );

        let host = entry.to_host(":").unwrap();
        assert!(!host.resolvable);
        assert!(host.resolution.is_none());
    }

    #[test]
    fn undeclared_dependency_is_dangling() {
        let entry = configuration(
            r#"
            name = "runtimeClasspath"

            [[components]]
            coordinate = "demo:app:"
            dependencies = ["com.ghost:ghost:1"]
            "#,
        );

        let err = entry.to_host(":app").unwrap_err();
        assert!(matches!(
            err,
            BuildLensError::Domain(DomainError::DanglingComponent { ref component, .. })
                if component == "com.ghost:ghost:1"
        ));
    }

    #[test]
    fn malformed_coordinate_is_rejected() {
        let entry = configuration(
            r#"
            name = "runtimeClasspath"

            [[components]]
            coordinate = "just-a-name"
            "#,
        );

        assert!(matches!(
            entry.to_host(":").unwrap_err(),
            BuildLensError::Domain(DomainError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn empty_resolvable_configuration_has_no_root() {
        let entry = configuration(r#"name = "annotationProcessor""#);
        let graph = entry.to_host(":").unwrap().resolution.unwrap();
        assert_eq!(graph.root(), None);
    }
}
