//! Command-line interface for venv-setup.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, EnvironmentArgs, SetupArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
