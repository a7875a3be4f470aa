//! Model Assembler - top-level driver of one model build.
//!
//! This service coordinates the whole extraction:
//! 1. Start from an empty task cache
//! 2. Build the project tree from the build root
//! 3. Backfill the root's task list from the cache
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{BuildHost, CapabilityDescriber},
        services::{AssemblyContext, ProjectTreeBuilder, task_collector::absolute_path},
    },
    domain::{ModelDiagnostics, ProjectNode, TaskCache, TaskInfo},
    error::BuildLensResult,
};

/// Result of one model build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledModel {
    pub root: ProjectNode,
    pub diagnostics: ModelDiagnostics,
}

/// Main model-building service.
pub struct ModelAssembler {
    host: Box<dyn BuildHost>,
    describer: Box<dyn CapabilityDescriber>,
}

impl ModelAssembler {
    /// Create a new assembler with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use buildlens_core::application::{ModelAssembler, ports::*};
    ///
    /// let assembler = ModelAssembler::new(
    ///     host,      // impl BuildHost
    ///     describer, // impl CapabilityDescriber
    /// );
    /// let model = assembler.assemble()?;
    /// ```
    pub fn new(host: Box<dyn BuildHost>, describer: Box<dyn CapabilityDescriber>) -> Self {
        Self { host, describer }
    }

    pub fn host(&self) -> &dyn BuildHost {
        self.host.as_ref()
    }

    /// Build the full model from the build root.
    ///
    /// Each call starts from a fresh [`AssemblyContext`], so repeated calls on
    /// an unchanged host return identical models.
    #[instrument(skip_all)]
    pub fn assemble(&self) -> BuildLensResult<AssembledModel> {
        let mut ctx = AssemblyContext::new();
        let root = self.assemble_with(&mut ctx)?;
        Ok(AssembledModel {
            root,
            diagnostics: ctx.diagnostics,
        })
    }

    /// Build the model using a caller-owned context, clearing it first.
    pub fn assemble_with(&self, ctx: &mut AssemblyContext) -> BuildLensResult<ProjectNode> {
        ctx.clear();

        let root = self
            .host
            .root()
            .ok_or(ApplicationError::MissingRootProject)?;
        info!(root = %root.name(), "Assembling build model");

        let builder = ProjectTreeBuilder::new(self.host.as_ref(), self.describer.as_ref());
        let mut model = builder
            .build(Some(root), Some(root), ctx)?
            .ok_or(ApplicationError::MissingRootProject)?;

        let root_build_file = absolute_path(root.directory(), root.build_file())
            .display()
            .to_string();
        let backfilled = reconcile_root_tasks(&mut model, &root_build_file, &ctx.cache);
        ctx.diagnostics.backfilled_tasks += backfilled;

        info!(
            projects = model.walk().count(),
            tasks = model.tasks.len(),
            backfilled,
            omissions = ctx.diagnostics.omissions(),
            "Build model assembled"
        );
        Ok(model)
    }
}

/// Append to `root.tasks` every cached task whose name the root does not
/// already list, re-homed to the root project. Returns how many were added.
pub fn reconcile_root_tasks(root: &mut ProjectNode, root_build_file: &str, cache: &TaskCache) -> usize {
    let mut names: HashSet<String> = root.tasks.iter().map(|t| t.name.clone()).collect();
    let mut added = 0;

    for cached in cache.iter() {
        if names.insert(cached.name.clone()) {
            debug!(task = %cached.name, from = %cached.path, "backfilling root task");
            root.tasks
                .push(TaskInfo::backfilled(cached, root.name.clone(), root_build_file));
            added += 1;
        }
    }

    added
}
