use serde::{Deserialize, Serialize};

use crate::domain::DependencyKind;

/// One node of a project's dependency tree.
///
/// The tree is rooted at a `Project` node whose children are `Configuration`
/// nodes, whose descendants are `Dependency` nodes keyed by coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyNode {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) kind: DependencyKind,
    pub(crate) children: Vec<DependencyNode>,
    /// Set on a revisited coordinate that was cut to a leaf.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) truncated: bool,
}

impl DependencyNode {
    pub fn new(name: impl Into<String>, kind: DependencyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
            truncated: false,
        }
    }

    pub fn project(name: impl Into<String>) -> Self {
        Self::new(name, DependencyKind::Project)
    }

    pub fn configuration(name: impl Into<String>) -> Self {
        Self::new(name, DependencyKind::Configuration)
    }

    pub fn dependency(coordinate: impl Into<String>) -> Self {
        Self::new(coordinate, DependencyKind::Dependency)
    }

    /// Childless leaf for a coordinate already expanded in the same pass.
    pub fn truncated(coordinate: impl Into<String>) -> Self {
        Self {
            truncated: true,
            ..Self::dependency(coordinate)
        }
    }

    pub fn add_child(&mut self, child: DependencyNode) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: DependencyNode) -> Self {
        self.add_child(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&DependencyNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(DependencyNode::count).sum::<usize>()
    }

    /// Length of the longest root-to-leaf path, a lone node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DependencyNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order iterator over this subtree.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DependencyNode {
        DependencyNode::project("app").with_child(
            DependencyNode::configuration("runtimeClasspath")
                .with_child(
                    DependencyNode::dependency("g:a:1").with_child(DependencyNode::dependency("g:b:1")),
                )
                .with_child(DependencyNode::truncated("g:b:1")),
        )
    }

    #[test]
    fn count_and_depth() {
        let tree = sample();
        assert_eq!(tree.count(), 5);
        assert_eq!(tree.depth(), 4);
    }

    #[test]
    fn iter_is_preorder() {
        let names: Vec<_> = sample().iter().map(|n| n.name().to_string()).collect();
        assert_eq!(
            names,
            vec!["app", "runtimeClasspath", "g:a:1", "g:b:1", "g:b:1"]
        );
    }

    #[test]
    fn truncated_flag_only_serialized_when_set() {
        let plain = serde_json::to_value(DependencyNode::dependency("g:a:1")).unwrap();
        assert!(plain.get("truncated").is_none());
        assert_eq!(plain["type"], "DEPENDENCY");

        let cut = serde_json::to_value(DependencyNode::truncated("g:a:1")).unwrap();
        assert_eq!(cut["truncated"], true);
    }
}
