//! venv-setup - Bootstrap a pyenv-backed Python development environment.
//!
//! Creates the repository's virtual environment with the Python version
//! pyenv provides, upgrades pip inside it and installs the development
//! dependencies.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and settings resolution
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Tracing subscriber setup and the log-file format
//! - [`shell`] - External command execution and executable lookup
//! - [`toolchain`] - pyenv queries
//! - [`ui`] - Prompts, spinners, and terminal output
//! - [`venv`] - The environment setup workflow
//!
//! # Example
//!
//! ```
//! use venv_setup::config::Settings;
//! use venv_setup::shell::RecordingRunner;
//! use venv_setup::venv::Bootstrapper;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let bootstrapper = Bootstrapper::new(Settings::defaults(temp.path()), RecordingRunner::new());
//!
//! // Nothing on the search path, so pyenv cannot be found.
//! assert!(!bootstrapper.tool_available());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod shell;
pub mod toolchain;
pub mod ui;
pub mod venv;

pub use error::{InstallationError, Result, SetupError};
