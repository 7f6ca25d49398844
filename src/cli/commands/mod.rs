//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. A bare `venv-setup` runs `setup`.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod setup;

pub use check::CheckCommand;
pub use completions::{write_completions, CompletionsCommand};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use setup::{load_settings, SetupCommand};
