//! `buildlens model`: assemble and print the full build model.

use tracing::{debug, instrument};

use buildlens_core::prelude::AssembledModel;

use crate::{
    cli::{ModelArgs, ModelFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    render,
};

#[instrument(skip_all)]
pub fn execute(args: ModelArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let format = args
        .format
        .unwrap_or_else(|| configured_format(&config.output.format));
    let show_diagnostics = args.diagnostics || config.model.include_diagnostics;
    debug!(?format, show_diagnostics, "rendering model");

    let model = super::assemble(&args.snapshot)?;

    match format {
        ModelFormat::Json => {
            let json = to_json(&model, show_diagnostics, config.model.pretty_json)?;
            output.data(&json)?;
        }
        ModelFormat::Tree => {
            output.data(render::project_tree(&model.root).trim_end())?;
            if show_diagnostics {
                output.print("")?;
                output.header("Diagnostics:")?;
                output.print(&model.diagnostics.to_string())?;
            }
            if !model.diagnostics.is_clean() && !show_diagnostics {
                output.warning(&format!(
                    "{} items were omitted from the model (use --diagnostics)",
                    model.diagnostics.omissions()
                ))?;
            }
        }
    }

    Ok(())
}

/// Map the `output.format` config value onto a model format.
fn configured_format(value: &str) -> ModelFormat {
    match value.to_ascii_lowercase().as_str() {
        "json" => ModelFormat::Json,
        _ => ModelFormat::Tree,
    }
}

/// The model's root project, or the whole `{root, diagnostics}` document.
fn to_json(model: &AssembledModel, with_diagnostics: bool, pretty: bool) -> CliResult<String> {
    let json = match (with_diagnostics, pretty) {
        (true, true) => serde_json::to_string_pretty(model)?,
        (true, false) => serde_json::to_string(model)?,
        (false, true) => serde_json::to_string_pretty(&model.root)?,
        (false, false) => serde_json::to_string(&model.root)?,
    };
    Ok(json)
}
