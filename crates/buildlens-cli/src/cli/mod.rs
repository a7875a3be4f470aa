//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "buildlens",
    bin_name = "buildlens",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Extract a serializable build model for editors and IDEs",
    long_about = "BuildLens reads a build snapshot (projects, resolved \
                  configurations, plugins, extensions and tasks) and assembles \
                  the model an editor needs: a project tree with dependency \
                  graphs, capability closures and a reconciled task list.",
    after_help = "EXAMPLES:\n\
        \x20 buildlens model snapshot.toml --format json\n\
        \x20 buildlens tasks snapshot.toml --group build\n\
        \x20 buildlens deps  snapshot.toml --project :app\n\
        \x20 buildlens completions bash > /usr/share/bash-completion/completions/buildlens",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Assemble and print the full build model.
    #[command(
        visible_alias = "m",
        about = "Assemble and print the build model",
        after_help = "EXAMPLES:\n\
            \x20 buildlens model snapshot.toml\n\
            \x20 buildlens model snapshot.json --format json --diagnostics"
    )]
    Model(ModelArgs),

    /// List the root project's reconciled tasks.
    #[command(
        visible_alias = "t",
        about = "List the tasks visible at the build root",
        after_help = "EXAMPLES:\n\
            \x20 buildlens tasks snapshot.toml\n\
            \x20 buildlens tasks snapshot.toml --group verification --format csv"
    )]
    Tasks(TasksArgs),

    /// Print one project's dependency tree.
    #[command(
        visible_alias = "d",
        about = "Print a project's dependency tree",
        after_help = "EXAMPLES:\n\
            \x20 buildlens deps snapshot.toml\n\
            \x20 buildlens deps snapshot.toml --project :libs:core"
    )]
    Deps(DepsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 buildlens completions bash > ~/.local/share/bash-completion/completions/buildlens\n\
            \x20 buildlens completions zsh  > ~/.zfunc/_buildlens\n\
            \x20 buildlens completions fish > ~/.config/fish/completions/buildlens.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the BuildLens configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 buildlens config get output.format\n\
            \x20 buildlens config list\n\
            \x20 buildlens config path"
    )]
    Config(ConfigCommands),
}

// ── model ─────────────────────────────────────────────────────────────────────

/// Arguments for `buildlens model`.
#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Snapshot file (`.toml` or `.json`).
    #[arg(value_name = "SNAPSHOT", help = "Build snapshot file (.toml or .json)")]
    pub snapshot: PathBuf,

    /// Output format. Falls back to `output.format` from the config.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ModelFormat>,

    /// Also print the omission counters.
    #[arg(long = "diagnostics", help = "Include omission diagnostics")]
    pub diagnostics: bool,
}

/// Output format for the `model` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelFormat {
    /// camelCase JSON document.
    Json,
    /// Indented project tree.
    Tree,
}

// ── tasks ─────────────────────────────────────────────────────────────────────

/// Arguments for `buildlens tasks`.
#[derive(Debug, Args)]
pub struct TasksArgs {
    #[arg(value_name = "SNAPSHOT", help = "Build snapshot file (.toml or .json)")]
    pub snapshot: PathBuf,

    /// Only list tasks in this group.
    #[arg(short = 'g', long = "group", value_name = "GROUP", help = "Filter by task group")]
    pub group: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: TaskFormat,
}

/// Output format for the `tasks` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── deps ──────────────────────────────────────────────────────────────────────

/// Arguments for `buildlens deps`.
#[derive(Debug, Args)]
pub struct DepsArgs {
    #[arg(value_name = "SNAPSHOT", help = "Build snapshot file (.toml or .json)")]
    pub snapshot: PathBuf,

    /// Project path, e.g. `:app`. Defaults to the build root.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "PATH",
        default_value = ":",
        help = "Project path (default: build root)"
    )]
    pub project: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `buildlens completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `buildlens config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_model_command() {
        let cli = Cli::parse_from(["buildlens", "model", "snap.toml", "--format", "json"]);
        match cli.command {
            Commands::Model(args) => {
                assert_eq!(args.snapshot, PathBuf::from("snap.toml"));
                assert_eq!(args.format, Some(ModelFormat::Json));
                assert!(!args.diagnostics);
            }
            other => panic!("expected Model command, got {other:?}"),
        }
    }

    #[test]
    fn model_format_is_optional() {
        let cli = Cli::parse_from(["buildlens", "m", "snap.toml"]);
        assert!(matches!(cli.command, Commands::Model(ModelArgs { format: None, .. })));
    }

    #[test]
    fn tasks_defaults_to_table() {
        let cli = Cli::parse_from(["buildlens", "tasks", "snap.toml", "-g", "build"]);
        if let Commands::Tasks(args) = cli.command {
            assert_eq!(args.format, TaskFormat::Table);
            assert_eq!(args.group.as_deref(), Some("build"));
        } else {
            panic!("expected Tasks command");
        }
    }

    #[test]
    fn deps_defaults_to_root_project() {
        let cli = Cli::parse_from(["buildlens", "deps", "snap.toml"]);
        if let Commands::Deps(args) = cli.command {
            assert_eq!(args.project, ":");
        } else {
            panic!("expected Deps command");
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["buildlens", "deps", "snap.toml", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["buildlens", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
