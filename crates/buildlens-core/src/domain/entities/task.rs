use serde::{Deserialize, Serialize};

use crate::domain::DeclaredTask;

/// An executable task as presented to the client.
///
/// Identity for caching and reconciliation is `name` alone, so `:app:build`
/// and `:lib:build` count as the same task there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    pub name: String,
    pub group: Option<String>,
    pub path: String,
    #[serde(rename = "project")]
    pub owning_project: String,
    pub build_file: String,
    pub root_project: String,
    pub description: Option<String>,
}

impl TaskInfo {
    /// Task collected from the registry of the project that declares it.
    pub fn collected(
        declared: &DeclaredTask,
        owning_project: impl Into<String>,
        build_file: impl Into<String>,
        root_project: impl Into<String>,
    ) -> Self {
        Self {
            name: declared.name.clone(),
            group: declared.group.clone(),
            path: declared.path.clone(),
            owning_project: owning_project.into(),
            build_file: build_file.into(),
            root_project: root_project.into(),
            description: declared.description.clone(),
        }
    }

    /// Root-level entry synthesized from a task seen elsewhere in the build.
    ///
    /// Name, group, path, description and root-project name come from the
    /// cached entry; owner and build file are rewritten to the build root.
    pub fn backfilled(
        cached: &TaskInfo,
        root_name: impl Into<String>,
        root_build_file: impl Into<String>,
    ) -> Self {
        Self {
            owning_project: root_name.into(),
            build_file: root_build_file.into(),
            ..cached.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared() -> DeclaredTask {
        DeclaredTask {
            name: "assemble".into(),
            group: Some("build".into()),
            path: ":app:assemble".into(),
            description: None,
        }
    }

    #[test]
    fn collected_copies_declaration() {
        let t = TaskInfo::collected(&declared(), "app", "/w/app/build.gradle", "demo");
        assert_eq!(t.name, "assemble");
        assert_eq!(t.group.as_deref(), Some("build"));
        assert_eq!(t.path, ":app:assemble");
        assert_eq!(t.owning_project, "app");
        assert_eq!(t.root_project, "demo");
        assert_eq!(t.description, None);
    }

    #[test]
    fn backfilled_overrides_owner_and_build_file_only() {
        let cached = TaskInfo::collected(&declared(), "app", "/w/app/build.gradle", "demo");
        let t = TaskInfo::backfilled(&cached, "demo", "/w/build.gradle");
        assert_eq!(t.owning_project, "demo");
        assert_eq!(t.build_file, "/w/build.gradle");
        assert_eq!(t.path, cached.path);
        assert_eq!(t.group, cached.group);
        assert_eq!(t.description, cached.description);
        assert_eq!(t.root_project, cached.root_project);
    }

    #[test]
    fn absent_description_serializes_as_null() {
        let t = TaskInfo::collected(&declared(), "app", "/w/app/build.gradle", "demo");
        let json = serde_json::to_value(&t).unwrap();
        assert!(json["description"].is_null());
        assert_eq!(json["project"], "app");
        assert_eq!(json["buildFile"], "/w/app/build.gradle");
        assert_eq!(json["rootProject"], "demo");
    }
}
