//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Bonnie - Behave BDD development companion.
#[derive(Debug, Parser)]
#[command(name = "bonnie")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace folder (repeatable; defaults to the current directory)
    #[arg(short, long = "workspace", value_name = "DIR", global = true)]
    pub workspaces: Vec<PathBuf>,

    /// Python interpreter to use (overrides pythonPath)
    #[arg(long, value_name = "PATH", global = true)]
    pub python: Option<String>,

    /// Print the behave command instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run all features (default if no command specified)
    Run,

    /// Run a feature file
    Feature(FeatureArgs),

    /// Run the scenario enclosing a line of a feature file
    Scenario(ScenarioArgs),

    /// Show the detected Python environment
    Status(StatusArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `feature` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FeatureArgs {
    /// Feature file to run
    pub file: PathBuf,
}

/// Arguments for the `scenario` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScenarioArgs {
    /// Feature file containing the scenario
    pub file: PathBuf,

    /// Line inside the scenario (1-based)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub line: u64,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long, conflicts_with_all = ["yaml", "schema"])]
    pub json: bool,

    /// Output as YAML (default)
    #[arg(long, conflicts_with = "schema")]
    pub yaml: bool,

    /// Print the JSON schema of the configuration file
    #[arg(long)]
    pub schema: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_none() {
        let cli = Cli::parse_from(["bonnie"]);
        assert!(cli.command.is_none());
        assert!(cli.workspaces.is_empty());
    }

    #[test]
    fn parses_repeated_workspaces() {
        let cli = Cli::parse_from(["bonnie", "-w", "api", "--workspace", "web", "run"]);
        assert_eq!(cli.workspaces, vec![PathBuf::from("api"), PathBuf::from("web")]);
        assert!(matches!(cli.command, Some(Commands::Run)));
    }

    #[test]
    fn parses_scenario_line() {
        let cli = Cli::parse_from(["bonnie", "scenario", "features/a.feature", "--line", "12"]);
        match cli.command {
            Some(Commands::Scenario(args)) => {
                assert_eq!(args.file, PathBuf::from("features/a.feature"));
                assert_eq!(args.line, 12);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn scenario_line_zero_is_rejected() {
        let result = Cli::try_parse_from(["bonnie", "scenario", "a.feature", "--line", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["bonnie", "feature", "a.feature", "--dry-run", "--python", "python3"]);
        assert!(cli.dry_run);
        assert_eq!(cli.python.as_deref(), Some("python3"));
    }

    #[test]
    fn config_output_flags_conflict() {
        assert!(Cli::try_parse_from(["bonnie", "config", "--json", "--schema"]).is_err());
        assert!(Cli::try_parse_from(["bonnie", "config", "--yaml"]).is_ok());
    }
}
