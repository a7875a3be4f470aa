//! Text renderings of model trees for terminal output.

use buildlens_core::prelude::{DependencyNode, ProjectNode};

const BRANCH: &str = "├── ";
const LAST: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Render any tree given a label function and a child accessor.
fn render_tree<T, L, C>(root: &T, label: L, children: C) -> String
where
    L: Fn(&T) -> String,
    C: Fn(&T) -> &[T],
{
    let mut out = label(root);
    out.push('\n');
    render_children(root, &label, &children, "", &mut out);
    out
}

fn render_children<T, L, C>(node: &T, label: &L, children: &C, prefix: &str, out: &mut String)
where
    L: Fn(&T) -> String,
    C: Fn(&T) -> &[T],
{
    let kids = children(node);
    for (i, child) in kids.iter().enumerate() {
        let last = i + 1 == kids.len();
        out.push_str(prefix);
        out.push_str(if last { LAST } else { BRANCH });
        out.push_str(&label(child));
        out.push('\n');

        let next = format!("{prefix}{}", if last { SPACE } else { PIPE });
        render_children(child, label, children, &next, out);
    }
}

fn dependency_label(node: &DependencyNode) -> String {
    if node.is_truncated() {
        format!("{} (*)", node.name())
    } else {
        node.name().to_owned()
    }
}

fn dependency_children(node: &DependencyNode) -> &[DependencyNode] {
    node.children()
}

fn project_label(project: &ProjectNode) -> String {
    format!(
        "{} ({}) [{} tasks]",
        project.name,
        project.project_path,
        project.tasks.len()
    )
}

fn project_children(project: &ProjectNode) -> &[ProjectNode] {
    &project.children
}

/// Dependency tree; truncated revisits are marked with `(*)`.
pub fn dependency_tree(root: &DependencyNode) -> String {
    render_tree(root, dependency_label, dependency_children)
}

/// Project hierarchy with task counts.
pub fn project_tree(root: &ProjectNode) -> String {
    render_tree(root, project_label, project_children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_tree_uses_connectors() {
        let tree = DependencyNode::project("app").with_child(
            DependencyNode::configuration("runtimeClasspath")
                .with_child(
                    DependencyNode::dependency("g:a:1")
                        .with_child(DependencyNode::dependency("g:b:1")),
                )
                .with_child(DependencyNode::truncated("g:b:1")),
        );

        let expected = "\
app
└── runtimeClasspath
    ├── g:a:1
    │   └── g:b:1
    └── g:b:1 (*)
";
        assert_eq!(dependency_tree(&tree), expected);
    }

    #[test]
    fn lone_root_renders_one_line() {
        assert_eq!(dependency_tree(&DependencyNode::project("solo")), "solo\n");
    }
}
