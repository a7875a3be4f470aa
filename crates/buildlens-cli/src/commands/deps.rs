//! `buildlens deps`: print one project's dependency tree.

use tracing::instrument;

use buildlens_core::application::ApplicationError;

use crate::{cli::DepsArgs, error::CliResult, output::OutputManager, render};

#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(args: DepsArgs, output: OutputManager) -> CliResult<()> {
    let model = super::assemble(&args.snapshot)?;

    let project = model
        .root
        .find(&args.project)
        .ok_or_else(|| ApplicationError::ProjectNotFound {
            path: args.project.clone(),
        })
        .map_err(buildlens_core::error::BuildLensError::from)?;

    if project.dependency_root.children().is_empty() {
        output.info(&format!("{} has no resolved dependencies", project.project_path))?;
    }
    output.data(render::dependency_tree(&project.dependency_root).trim_end())?;

    Ok(())
}
