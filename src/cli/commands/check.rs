//! Check command implementation.
//!
//! `venv-setup check` reports whether `setup` would get past its
//! installation checks, without prompting or changing anything.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::{Result, SetupError};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;
use crate::venv::{Bootstrapper, Diagnosis};

use super::dispatcher::{Command, CommandResult};
use super::setup::load_settings;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
    runner: Box<dyn CommandRunner>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
            runner: Box::new(SystemRunner::new()),
        }
    }

    /// Run external commands through `runner` instead of spawning them.
    pub fn with_runner(mut self, runner: Box<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    fn show(&self, diagnosis: &Diagnosis, ui: &mut dyn UserInterface) {
        ui.show_header("Environment check");

        ui.message(&format!("Repository:   {}", diagnosis.repo_root.display()));
        let state = if diagnosis.environment_exists {
            "exists"
        } else {
            "not created"
        };
        ui.message(&format!(
            "Environment:  {} ({})",
            diagnosis.venv_dir.display(),
            state
        ));

        match &diagnosis.pyenv {
            Some(path) => ui.success(&format!("pyenv found at {}", path.display())),
            None => ui.error("pyenv not found in PATH"),
        }

        match diagnosis.version_installed {
            Some(true) => ui.success(&format!(
                "Python {} installed ({})",
                diagnosis.python_version,
                diagnosis.interpreter.display()
            )),
            Some(false) => {
                ui.error(&format!(
                    "Python {} is not installed",
                    diagnosis.python_version
                ));
                ui.show_hint(&format!("Run: pyenv install {}", diagnosis.python_version));
            }
            None => ui.warning(&format!(
                "Python {} could not be checked",
                diagnosis.python_version
            )),
        }

        if diagnosis.requirements_exist {
            ui.success(&format!(
                "Requirements: {}",
                diagnosis.requirements.display()
            ));
        } else {
            ui.warning(&format!(
                "Requirements file not found: {}",
                diagnosis.requirements.display()
            ));
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(
            &self.project_root,
            self.config_path.as_deref(),
            &self.args.environment.overrides(),
        )?;

        let diagnosis = Bootstrapper::new(settings, self.runner.as_ref()).diagnose()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&diagnosis)
                .map_err(|e| SetupError::Other(e.into()))?;
            println!("{}", json);
        } else {
            self.show(&diagnosis, ui);
        }

        if diagnosis.ready() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
