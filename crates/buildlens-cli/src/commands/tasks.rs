//! `buildlens tasks`: list the tasks visible at the build root.

use tracing::instrument;

use buildlens_core::prelude::TaskInfo;

use crate::{
    cli::{TaskFormat, TasksArgs},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: TasksArgs, output: OutputManager) -> CliResult<()> {
    let model = super::assemble(&args.snapshot)?;

    let tasks: Vec<&TaskInfo> = model
        .root
        .tasks
        .iter()
        .filter(|t| match &args.group {
            Some(group) => t.group.as_deref() == Some(group.as_str()),
            None => true,
        })
        .collect();

    match args.format {
        TaskFormat::Table => {
            if tasks.is_empty() {
                output.info("No tasks found")?;
                return Ok(());
            }
            output.header(&format!("Tasks of {}:", model.root.name))?;
            let width = tasks.iter().map(|t| t.name.len()).max().unwrap_or(0);
            for task in &tasks {
                output.data(&format!(
                    "  {:<width$}  {:<12}  {}",
                    task.name,
                    task.group.as_deref().unwrap_or("-"),
                    task.path,
                ))?;
            }
        }
        TaskFormat::List => {
            for task in &tasks {
                output.data(&task.name)?;
            }
        }
        TaskFormat::Json => {
            output.data(&serde_json::to_string_pretty(&tasks)?)?;
        }
        TaskFormat::Csv => {
            output.data("name,group,path,project,description")?;
            for task in &tasks {
                output.data(&csv_row(task))?;
            }
        }
    }

    Ok(())
}

fn csv_row(task: &TaskInfo) -> String {
    [
        task.name.as_str(),
        task.group.as_deref().unwrap_or_default(),
        task.path.as_str(),
        task.owning_project.as_str(),
        task.description.as_deref().unwrap_or_default(),
    ]
    .iter()
    .map(|field| csv_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote a field when it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
