//! Task collection for a single project.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::{
    application::{ports::HostProject, services::AssemblyContext},
    domain::TaskInfo,
};

/// Reads a project's task registry into [`TaskInfo`] entries and records each
/// one in the invocation's task cache.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskCollector;

impl TaskCollector {
    pub fn new() -> Self {
        Self
    }

    /// Collect `project`'s tasks in declaration order.
    ///
    /// Every task also goes into `ctx.cache` unconditionally; a task whose
    /// name is already cached replaces the earlier entry.
    pub fn collect(
        &self,
        root_name: &str,
        project: &dyn HostProject,
        ctx: &mut AssemblyContext,
    ) -> Vec<TaskInfo> {
        let build_file = absolute_path(project.directory(), project.build_file());
        let build_file = build_file.display().to_string();

        project
            .tasks()
            .iter()
            .map(|declared| {
                let task = TaskInfo::collected(declared, project.name(), &build_file, root_name);
                if let Some(previous) = ctx.cache.insert(task.clone()) {
                    trace!(
                        task = %task.name,
                        replaced = %previous.path,
                        by = %task.path,
                        "task cache entry overwritten"
                    );
                    ctx.diagnostics.task_cache_overwrites += 1;
                }
                task
            })
            .collect()
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub(crate) fn absolute_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
