use serde::{Deserialize, Serialize};

use crate::domain::entities::{CapabilityClosure, DependencyNode, TaskInfo};

/// Model of one project and, recursively, its subprojects.
///
/// Built once per project during a single traversal. The only mutation after
/// construction is the root-level task backfill done by the assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNode {
    pub is_root: bool,
    pub name: String,
    /// Host path of the project (`:`, `:app`).
    pub project_path: String,
    /// Absolute project directory.
    pub directory_path: String,
    pub children: Vec<ProjectNode>,
    pub tasks: Vec<TaskInfo>,
    pub dependency_root: DependencyNode,
    pub plugins: Vec<String>,
    pub closures: Vec<CapabilityClosure>,
    /// Absolute build-script classpath entries.
    pub script_classpath: Vec<String>,
}

impl ProjectNode {
    pub fn task(&self, name: &str) -> Option<&TaskInfo> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|t| t.name.as_str())
    }

    /// Depth-first, pre-order walk over this project and all descendants.
    pub fn walk(&self) -> impl Iterator<Item = &ProjectNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Find a project in this subtree by its project path (`:`, `:app`).
    pub fn find(&self, project_path: &str) -> Option<&ProjectNode> {
        self.walk().find(|p| p.project_path == project_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, path: &str, children: Vec<ProjectNode>) -> ProjectNode {
        ProjectNode {
            is_root: path == ":",
            name: name.into(),
            project_path: path.into(),
            directory_path: format!("/w/{name}"),
            children,
            tasks: Vec::new(),
            dependency_root: DependencyNode::project(name),
            plugins: Vec::new(),
            closures: Vec::new(),
            script_classpath: Vec::new(),
        }
    }

    #[test]
    fn walk_visits_children_in_order() {
        let root = node(
            "demo",
            ":",
            vec![
                node("app", ":app", vec![node("ui", ":app:ui", vec![])]),
                node("lib", ":lib", vec![]),
            ],
        );
        let paths: Vec<_> = root.walk().map(|p| p.project_path.as_str()).collect();
        assert_eq!(paths, vec![":", ":app", ":app:ui", ":lib"]);
    }

    #[test]
    fn find_by_project_path() {
        let root = node("demo", ":", vec![node("lib", ":lib", vec![])]);
        assert_eq!(root.find(":lib").map(|p| p.name.as_str()), Some("lib"));
        assert!(root.find(":nope").is_none());
    }

    #[test]
    fn serializes_with_client_field_names() {
        let json = serde_json::to_value(node("demo", ":", vec![])).unwrap();
        assert_eq!(json["isRoot"], true);
        assert_eq!(json["projectPath"], ":");
        assert_eq!(json["directoryPath"], "/w/demo");
        assert!(json.get("dependencyRoot").is_some());
        assert!(json.get("scriptClasspath").is_some());
    }
}
