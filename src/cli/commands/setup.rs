//! Setup command implementation.
//!
//! `venv-setup setup` (or a bare `venv-setup`) builds the development
//! environment for the repository.

use std::path::{Path, PathBuf};

use crate::cli::args::SetupArgs;
use crate::config::{load_project_config, Overrides, Settings};
use crate::error::Result;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;
use crate::venv::{Bootstrapper, SetupOutcome};

use super::dispatcher::{Command, CommandResult};

/// Resolve settings for `project_root` from its config file and the command line.
pub fn load_settings(
    project_root: &Path,
    config_path: Option<&Path>,
    overrides: &Overrides,
) -> Result<Settings> {
    let (file, source) = load_project_config(project_root, config_path)?;
    match &source {
        Some(path) => tracing::info!("Using config {}", path.display()),
        None => tracing::debug!("No config file, using defaults"),
    }
    Ok(Settings::resolve(project_root, &file, overrides, |key| {
        std::env::var(key)
    }))
}

/// The setup command implementation.
pub struct SetupCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: SetupArgs,
    runner: Box<dyn CommandRunner>,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: SetupArgs) -> Self {
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

    /// Get the command arguments.
    pub fn args(&self) -> &SetupArgs {
        &self.args
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(
            &self.project_root,
            self.config_path.as_deref(),
            &self.args.overrides(),
        )?;
        tracing::debug!("Resolved settings: {:?}", settings);

        ui.show_header(&format!(
            "Python {} development environment",
            settings.python_version
        ));

        let bootstrapper = Bootstrapper::new(settings, self.runner.as_ref());
        let report = match bootstrapper.set_up_environment(ui)? {
            SetupOutcome::Declined => return Ok(CommandResult::success()),
            SetupOutcome::Completed(report) => report,
        };

        let failed = report.failed_steps();
        if failed.is_empty() {
            ui.success(&format!(
                "Development environment ready at {}",
                report.venv_dir.display()
            ));
        } else {
            let labels: Vec<&str> = failed.iter().map(|s| s.kind.label()).collect();
            ui.warning(&format!(
                "Environment created at {}, but some steps failed: {}",
                report.venv_dir.display(),
                labels.join(", ")
            ));
            ui.show_hint("Re-run with --strict to stop at the first failing step");
        }

        Ok(CommandResult::success())
    }
}
