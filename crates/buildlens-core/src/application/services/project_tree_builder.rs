//! Project tree builder.
//!
//! Builds one project's [`ProjectNode`] and recurses into its subprojects.
//! Tasks of a project are collected after all of its subprojects, so on a
//! task-name clash the cache ends up holding the ancestor's task.

use tracing::{debug, instrument};

use crate::{
    application::{
        ports::{BuildHost, CapabilityDescriber, HostProject},
        services::{
            AssemblyContext, CapabilityClosureExtractor, DependencyGraphResolver, TaskCollector,
            task_collector::absolute_path,
        },
    },
    domain::ProjectNode,
    error::BuildLensResult,
};

/// Recursive builder for the project hierarchy.
pub struct ProjectTreeBuilder<'a> {
    host: &'a dyn BuildHost,
    resolver: DependencyGraphResolver,
    closures: CapabilityClosureExtractor<'a>,
    tasks: TaskCollector,
}

impl<'a> ProjectTreeBuilder<'a> {
    pub fn new(host: &'a dyn BuildHost, describer: &'a dyn CapabilityDescriber) -> Self {
        Self {
            host,
            resolver: DependencyGraphResolver::new(),
            closures: CapabilityClosureExtractor::new(describer),
            tasks: TaskCollector::new(),
        }
    }

    /// Build the model for `project`, or `None` if either reference is absent.
    #[instrument(
        skip_all,
        fields(project = project.map(|p| p.path()).unwrap_or("<absent>"))
    )]
    pub fn build(
        &self,
        root: Option<&dyn HostProject>,
        project: Option<&dyn HostProject>,
        ctx: &mut AssemblyContext,
    ) -> BuildLensResult<Option<ProjectNode>> {
        let (Some(root), Some(project)) = (root, project) else {
            return Ok(None);
        };

        let script_classpath = project
            .script_classpath()
            .iter()
            .map(|entry| {
                absolute_path(project.directory(), entry)
                    .display()
                    .to_string()
            })
            .collect();

        let dependency_root =
            self.resolver
                .resolve(project.name(), project.configurations(), &mut ctx.diagnostics)?;
        let plugins = project.plugins().to_vec();
        let closures = self
            .closures
            .extract(project.extension_schemas(), &mut ctx.diagnostics);

        let mut children = Vec::new();
        for path in project.subproject_paths() {
            let sub = self.host.project(path);
            if sub.is_none() {
                debug!(subproject = %path, "host has no project for subproject path");
                ctx.diagnostics.missing_subprojects += 1;
            }
            if let Some(child) = self.build(Some(root), sub, ctx)? {
                children.push(child);
            }
        }

        let tasks = self.tasks.collect(root.name(), project, ctx);

        debug!(
            children = children.len(),
            tasks = tasks.len(),
            "project model built"
        );

        Ok(Some(ProjectNode {
            is_root: project.parent_path().is_none(),
            name: project.name().to_string(),
            project_path: project.path().to_string(),
            directory_path: project.directory().display().to_string(),
            children,
            tasks,
            dependency_root,
            plugins,
            closures,
            script_classpath,
        }))
    }
}
