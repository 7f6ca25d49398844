//! Read-only readiness report.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::Result;
use crate::shell::CommandRunner;
use crate::toolchain::pyenv;

use super::bootstrap::Bootstrapper;
use super::layout::environment_exists;

/// Everything `venv-setup check` reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub repo_root: PathBuf,
    pub venv_dir: PathBuf,
    pub environment_exists: bool,
    pub pyenv: Option<PathBuf>,
    pub python_version: String,
    /// `None` when pyenv could not be asked.
    pub version_installed: Option<bool>,
    pub interpreter: PathBuf,
    pub requirements: PathBuf,
    pub requirements_exist: bool,
}

impl Diagnosis {
    /// Whether `setup` would get past the installation checks.
    pub fn ready(&self) -> bool {
        self.pyenv.is_some() && self.version_installed == Some(true)
    }
}

impl<R: CommandRunner> Bootstrapper<R> {
    /// Inspect the environment and toolchain without changing anything.
    ///
    /// pyenv is only invoked when it is on the search path.
    pub fn diagnose(&self) -> Result<Diagnosis> {
        let settings = self.settings();
        let location = self.tool_location();

        let version_installed = match &location {
            Some(manager) => Some(
                pyenv::installed_versions(self.runner(), manager)?
                    .contains(&settings.python_version),
            ),
            None => None,
        };

        Ok(Diagnosis {
            repo_root: settings.repo_root.clone(),
            venv_dir: settings.venv_dir.clone(),
            environment_exists: environment_exists(&settings.venv_dir),
            pyenv: location,
            python_version: settings.python_version.clone(),
            version_installed,
            interpreter: pyenv::interpreter_path(&settings.pyenv_root, &settings.python_version),
            requirements: settings.requirements.clone(),
            requirements_exist: settings.requirements.is_file(),
        })
    }
}
