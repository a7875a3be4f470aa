//! Command handlers, one module per subcommand.

use std::path::Path;

use tracing::{debug, instrument};

use buildlens_adapters::SnapshotLoader;
use buildlens_core::prelude::AssembledModel;

use crate::error::CliResult;

pub mod completions;
pub mod config;
pub mod deps;
pub mod model;
pub mod tasks;

/// Load a snapshot file and assemble its model with a fresh context.
#[instrument(skip_all, fields(snapshot = %snapshot.display()))]
pub(crate) fn assemble(snapshot: &Path) -> CliResult<AssembledModel> {
    let model = SnapshotLoader::new(snapshot)
        .load()?
        .into_assembler()
        .assemble()?;
    debug!(tasks = model.root.tasks.len(), "model assembled");
    Ok(model)
}
