//! Small immutable value types shared across the domain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

// ============================================================================
// ModuleCoordinate
// ============================================================================

/// A `group:artifact:version` module coordinate.
///
/// Identity for dependency deduplication is the full rendered string, so two
/// coordinates are the same node iff all three parts match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleCoordinate {
    group: String,
    artifact: String,
    version: String,
}

impl ModuleCoordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl FromStr for ModuleCoordinate {
    type Err = DomainError;

    /// Parses `group:artifact:version`. Group and version may be empty (hosts
    /// report unversioned project components that way), the artifact may not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, artifact, version] if !artifact.trim().is_empty() => {
                Ok(Self::new(*group, *artifact, *version))
            }
            _ => Err(DomainError::InvalidCoordinate {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for ModuleCoordinate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModuleCoordinate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// ComponentId
// ============================================================================

/// Index of a component inside one [`ResolutionGraph`](crate::domain::ResolutionGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub usize);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// DependencyKind
// ============================================================================

/// What a [`DependencyNode`](crate::domain::DependencyNode) stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DependencyKind {
    Project,
    Configuration,
    Dependency,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project => write!(f, "project"),
            Self::Configuration => write!(f, "configuration"),
            Self::Dependency => write!(f, "dependency"),
        }
    }
}

// ============================================================================
// Project paths
// ============================================================================

/// Separator between segments of a project or task path (`:app:build`).
pub const PATH_SEPARATOR: char = ':';

/// Fully qualified path of a task named `task` inside the project at
/// `project_path`. The root project's path is `:` so its tasks become `:name`.
pub fn task_path(project_path: &str, task: &str) -> String {
    if project_path.is_empty() || project_path == ":" {
        format!("{PATH_SEPARATOR}{task}")
    } else {
        format!("{project_path}{PATH_SEPARATOR}{task}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_round_trips_through_display() {
        let c: ModuleCoordinate = "org.slf4j:slf4j-api:2.0.9".parse().unwrap();
        assert_eq!(c.group(), "org.slf4j");
        assert_eq!(c.artifact(), "slf4j-api");
        assert_eq!(c.version(), "2.0.9");
        assert_eq!(c.to_string(), "org.slf4j:slf4j-api:2.0.9");
    }

    #[test]
    fn coordinate_allows_empty_group_and_version() {
        let c: ModuleCoordinate = ":app:".parse().unwrap();
        assert_eq!(c.artifact(), "app");
        assert_eq!(c.to_string(), ":app:");
    }

    #[test]
    fn coordinate_rejects_wrong_arity() {
        assert!("a:b".parse::<ModuleCoordinate>().is_err());
        assert!("a:b:c:d".parse::<ModuleCoordinate>().is_err());
        assert!("a::1.0".parse::<ModuleCoordinate>().is_err());
    }

    #[test]
    fn task_path_for_root_and_nested_projects() {
        assert_eq!(task_path(":", "build"), ":build");
        assert_eq!(task_path("", "build"), ":build");
        assert_eq!(task_path(":app", "build"), ":app:build");
        assert_eq!(task_path(":libs:core", "jar"), ":libs:core:jar");
    }

    #[test]
    fn dependency_kind_serializes_uppercase() {
        let json = serde_json::to_string(&DependencyKind::Configuration).unwrap();
        assert_eq!(json, "\"CONFIGURATION\"");
    }
}
