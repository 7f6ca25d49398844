//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{OverwritePolicy, Overrides};

/// venv-setup - Bootstrap a pyenv-backed Python development environment.
#[derive(Debug, Parser)]
#[command(name = "venv-setup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .venv-setup.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to repository root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output; external command output is shown only on failure
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Also write DEBUG-level logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the environment and install dependencies (default if no command specified)
    Setup(SetupArgs),

    /// Report whether the environment could be created right now
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where and how to build the environment.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvironmentArgs {
    /// Python version pyenv must provide
    #[arg(long, env = "VENV_SETUP_PYTHON", value_name = "VERSION")]
    pub python: Option<String>,

    /// Environment directory (relative paths are under the repository root)
    #[arg(long, value_name = "DIR")]
    pub venv_dir: Option<PathBuf>,

    /// Dependency manifest (relative paths are under the repository root)
    #[arg(long, value_name = "FILE")]
    pub requirements: Option<PathBuf>,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    #[command(flatten)]
    pub environment: EnvironmentArgs,

    /// What to do when an environment already exists
    #[arg(long, value_enum, env = "VENV_SETUP_OVERWRITE", default_value_t = OverwritePolicy::Ask)]
    pub overwrite: OverwritePolicy,

    /// Abort when creating the environment, upgrading pip, or installing dependencies fails
    #[arg(long)]
    pub strict: bool,

    /// Do not upgrade pip before installing dependencies
    #[arg(long)]
    pub skip_pip_upgrade: bool,
}

impl SetupArgs {
    /// Arguments of a bare `venv-setup` invocation.
    ///
    /// Same as `venv-setup setup` with no flags, so the `VENV_SETUP_*`
    /// environment variables still apply.
    pub fn from_environment() -> Self {
        use clap::{Args, FromArgMatches};

        Self::augment_args(clap::Command::new("setup"))
            .try_get_matches_from(["setup"])
            .ok()
            .and_then(|matches| Self::from_arg_matches(&matches).ok())
            .unwrap_or_default()
    }

    /// Command-line layer of the settings.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            overwrite: self.overwrite,
            strict: self.strict.then_some(true),
            upgrade_pip: self.skip_pip_upgrade.then_some(false),
            ..self.environment.overrides()
        }
    }
}

impl EnvironmentArgs {
    /// Command-line layer of the settings.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            python_version: self.python.clone(),
            venv_dir: self.venv_dir.clone(),
            requirements: self.requirements.clone(),
            ..Default::default()
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub environment: EnvironmentArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
