//! Error types for venv-setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, [`InstallationError`] for the toolchain checks that gate
//! environment creation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `InstallationError` when a required tool or runtime is missing; each
//!   variant carries a remediation the user can act on
//! - Use `SetupError` for everything else that needs distinct handling
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// A required tool or runtime version is not installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallationError {
    /// The version manager executable is not on the search path.
    #[error("Couldn't find `{tool}` in PATH")]
    ToolNotFound { tool: String },

    /// The version manager does not have the required runtime installed.
    #[error("{tool} does not have Python version {version}, run: {tool} install {version}")]
    RuntimeVersionMissing { tool: String, version: String },
}

impl InstallationError {
    /// Human-readable instruction for fixing the problem.
    pub fn remediation(&self) -> String {
        match self {
            Self::ToolNotFound { tool } => format!(
                "Install {tool} (https://github.com/pyenv/pyenv#installation) and make sure it is on your PATH"
            ),
            Self::RuntimeVersionMissing { tool, version } => {
                format!("{tool} install {version}")
            }
        }
    }
}

/// Core error type for venv-setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Toolchain check failed before the environment could be created.
    #[error(transparent)]
    Installation(#[from] InstallationError),

    /// The old environment was still present after deletion.
    #[error("Failed to remove existing environment at {path}")]
    EnvironmentNotRemoved { path: PathBuf },

    /// The environment directory is the repository root or one of its parents.
    #[error("Refusing to use {path} as the environment directory: it contains the repository at {repo_root}")]
    UnsafeEnvironmentPath { path: PathBuf, repo_root: PathBuf },

    /// External command could not be spawned or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Input ended before the user answered a prompt.
    #[error("Input closed before '{question}' was answered")]
    PromptClosed { question: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SetupError {
    /// Remediation hint to show alongside the error, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Installation(err) => Some(err.remediation()),
            Self::EnvironmentNotRemoved { .. } => Some(
                "Check the directory's permissions, or whether another process is writing to it"
                    .to_string(),
            ),
            Self::UnsafeEnvironmentPath { .. } => Some(
                "Set venv_dir to a subdirectory of the repository, such as .venv".to_string(),
            ),
            _ => None,
        }
    }
}

/// Result type alias for venv-setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_not_found_names_tool() {
        let err = InstallationError::ToolNotFound {
            tool: "pyenv".into(),
        };
        insta::assert_snapshot!(err.to_string(), @"Couldn't find `pyenv` in PATH");
    }

    #[test]
    fn runtime_version_missing_includes_install_command() {
        let err = InstallationError::RuntimeVersionMissing {
            tool: "pyenv".into(),
            version: "3.10.0".into(),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"pyenv does not have Python version 3.10.0, run: pyenv install 3.10.0"
        );
        assert_eq!(err.remediation(), "pyenv install 3.10.0");
    }

    #[test]
    fn installation_error_is_transparent_in_setup_error() {
        let err: SetupError = InstallationError::ToolNotFound {
            tool: "pyenv".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Couldn't find `pyenv` in PATH");
        assert!(err.hint().unwrap().contains("pyenv"));
    }

    #[test]
    fn environment_not_removed_displays_path() {
        let err = SetupError::EnvironmentNotRemoved {
            path: PathBuf::from("/repo/.venv"),
        };
        assert!(err.to_string().contains("/repo/.venv"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn unsafe_environment_path_names_both_paths() {
        let err = SetupError::UnsafeEnvironmentPath {
            path: PathBuf::from("/repo"),
            repo_root: PathBuf::from("/repo"),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"Refusing to use /repo as the environment directory: it contains the repository at /repo"
        );
        assert!(err.hint().unwrap().contains(".venv"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = SetupError::CommandFailed {
            command: "pip install -r requirements/dev.txt".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip install -r requirements/dev.txt"));
        assert!(msg.contains("1"));
        assert!(err.hint().is_none());
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = SetupError::ConfigParseError {
            path: PathBuf::from("/repo/.venv-setup.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/repo/.venv-setup.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::Io(_)));
    }
}
