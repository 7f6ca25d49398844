//! The environment setup workflow.
//!
//! [`Bootstrapper::set_up_environment`] runs the whole sequence:
//!
//! 1. If something already exists at the target path, decide whether to
//!    replace it (prompting unless the overwrite policy says otherwise).
//! 2. Verify pyenv is on the search path and has the requested Python.
//! 3. Remove the old environment, verifying it is gone.
//! 4. Create the new environment with pyenv's interpreter.
//! 5. Upgrade pip, then install the dependency manifest.
//!
//! A target directory that is the repository root or one of its parents is
//! refused before anything else happens.
//!
//! The toolchain checks run before the old environment is removed, so a
//! missing pyenv or Python never leaves the repository without an
//! environment. Nothing past the checks is rolled back: a failed dependency
//! install leaves the freshly created environment in place.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::{OverwritePolicy, Settings};
use crate::error::{InstallationError, Result, SetupError};
use crate::shell::{CommandRunner, CommandSpec};
use crate::toolchain::{pyenv, Toolchain};
use crate::ui::{ask_yes_no, Prompt, UserInterface};

use super::layout::{
    delete_environment_with, ensure_environment_path, environment_exists, pip_path, remove_path,
};

/// Prompt key for the overwrite confirmation.
pub const OVERWRITE_PROMPT_KEY: &str = "overwrite";

/// Answer to "do you want to overwrite it?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    Confirmed,
    Declined,
}

/// External steps of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    CreateEnvironment,
    UpgradeInstaller,
    InstallDependencies,
}

impl StepKind {
    /// Short label for spinners and warnings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreateEnvironment => "Create environment",
            Self::UpgradeInstaller => "Upgrade pip",
            Self::InstallDependencies => "Install dependencies",
        }
    }
}

/// What happened when one external step ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub kind: StepKind,
    pub command: String,
    pub exit_code: Option<i32>,
    pub success: bool,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    /// Where the environment was created.
    pub venv_dir: PathBuf,
    /// Whether a previous environment was removed first.
    pub replaced_existing: bool,
    /// The toolchain the environment was built with.
    pub toolchain: Toolchain,
    /// External steps in the order they ran.
    pub steps: Vec<StepReport>,
}

impl SetupReport {
    /// Steps that exited unsuccessfully.
    pub fn failed_steps(&self) -> Vec<&StepReport> {
        self.steps.iter().filter(|s| !s.success).collect()
    }

    /// Check whether every step exited successfully.
    pub fn all_succeeded(&self) -> bool {
        self.steps.iter().all(|s| s.success)
    }
}

/// Result of [`Bootstrapper::set_up_environment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The user chose to keep the existing environment; nothing was done.
    Declined,
    /// A fresh environment was created.
    Completed(SetupReport),
}

/// Ask whether the environment at `path` should be replaced.
///
/// Re-prompts until the answer is `y` or `n` (case-insensitive).
pub fn prompt_overwrite(ui: &mut dyn UserInterface, path: &Path) -> Result<OverwriteDecision> {
    tracing::debug!("Asking whether to overwrite {}", path.display());
    let prompt = Prompt::new(OVERWRITE_PROMPT_KEY, "Do you want to overwrite it? [y/n]");

    if ask_yes_no(ui, &prompt)? {
        Ok(OverwriteDecision::Confirmed)
    } else {
        Ok(OverwriteDecision::Declined)
    }
}

/// Removes an existing environment before it is replaced.
pub type Remover = fn(&Path) -> io::Result<()>;

/// Creates and populates a development environment.
pub struct Bootstrapper<R: CommandRunner> {
    settings: Settings,
    runner: R,
    remover: Remover,
}

impl<R: CommandRunner> Bootstrapper<R> {
    /// Create a bootstrapper for the given settings.
    pub fn new(settings: Settings, runner: R) -> Self {
        Self {
            settings,
            runner,
            remover: remove_path,
        }
    }

    /// Replace the step that removes an existing environment.
    ///
    /// Removal is still followed by the check that the path is gone.
    pub fn with_remover(mut self, remover: Remover) -> Self {
        self.remover = remover;
        self
    }

    /// Get the settings this bootstrapper runs with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get the command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolved path of the pyenv executable, if it is on the search path.
    pub fn tool_location(&self) -> Option<PathBuf> {
        pyenv::locate(&self.runner.search_path())
    }

    /// Check whether pyenv is on the search path.
    pub fn tool_available(&self) -> bool {
        self.tool_location().is_some()
    }

    /// Check whether pyenv has `version` installed.
    ///
    /// # Errors
    ///
    /// Returns `ToolNotFound` if pyenv is not on the search path.
    pub fn tool_has_runtime_version(&self, version: &str) -> Result<bool> {
        let manager = self.require_tool()?;
        let versions = pyenv::installed_versions(&self.runner, &manager)?;
        Ok(versions.contains(version))
    }

    /// Run both installation checks and resolve the interpreter to use.
    pub fn verify_toolchain(&self, ui: &mut dyn UserInterface) -> Result<Toolchain> {
        let manager = self.require_tool()?;
        let version = &self.settings.python_version;

        ui.message(&format!(
            "Checking that pyenv has Python {} installed...",
            version
        ));
        let versions = pyenv::installed_versions(&self.runner, &manager)?;
        if !versions.contains(version) {
            return Err(InstallationError::RuntimeVersionMissing {
                tool: pyenv::PYENV.to_string(),
                version: version.clone(),
            }
            .into());
        }

        Ok(Toolchain {
            manager,
            version: version.clone(),
            interpreter: pyenv::interpreter_path(&self.settings.pyenv_root, version),
        })
    }

    /// Verify the toolchain, then create an environment at `path`.
    pub fn create_environment(
        &self,
        ui: &mut dyn UserInterface,
        path: &Path,
    ) -> Result<StepReport> {
        let toolchain = self.verify_toolchain(ui)?;
        self.create_environment_with(ui, &toolchain, path)
    }

    /// Create an environment at `path` with an already verified toolchain.
    pub fn create_environment_with(
        &self,
        ui: &mut dyn UserInterface,
        toolchain: &Toolchain,
        path: &Path,
    ) -> Result<StepReport> {
        ui.message(&format!(
            "Creating a Python {} venv with pyenv at {}...",
            toolchain.version,
            path.display()
        ));
        let spec = CommandSpec::new(&toolchain.interpreter)
            .args(["-m", "venv"])
            .arg(path);
        self.run_step(ui, StepKind::CreateEnvironment, spec)
    }

    /// Upgrade the environment's pip to the latest release.
    pub fn upgrade_installer(&self, ui: &mut dyn UserInterface, env: &Path) -> Result<StepReport> {
        ui.message("Upgrading pip to latest available version...");
        let spec = CommandSpec::new(pip_path(env)).args(["install", "--upgrade", "pip"]);
        self.run_step(ui, StepKind::UpgradeInstaller, spec)
    }

    /// Install the dependency manifest into the environment.
    pub fn install_dependencies(
        &self,
        ui: &mut dyn UserInterface,
        env: &Path,
        manifest: &Path,
    ) -> Result<StepReport> {
        ui.message(&format!(
            "Installing development dependencies from {} ...",
            manifest.display()
        ));
        let spec = CommandSpec::new(pip_path(env))
            .args(["install", "-r"])
            .arg(manifest);
        self.run_step(ui, StepKind::InstallDependencies, spec)
    }

    /// Run the full setup workflow.
    pub fn set_up_environment(&self, ui: &mut dyn UserInterface) -> Result<SetupOutcome> {
        let venv_dir = self.settings.venv_dir.clone();
        ensure_environment_path(&venv_dir, &self.settings.repo_root)?;

        let replacing = environment_exists(&venv_dir);

        if replacing {
            ui.message(&format!(
                "A virtual environment already exists at {}",
                venv_dir.display()
            ));

            let decision = match self.settings.overwrite {
                OverwritePolicy::Ask => prompt_overwrite(ui, &venv_dir)?,
                OverwritePolicy::Always => OverwriteDecision::Confirmed,
                OverwritePolicy::Never => OverwriteDecision::Declined,
            };

            if decision == OverwriteDecision::Declined {
                ui.message("Nothing else will be done, bye!");
                return Ok(SetupOutcome::Declined);
            }
        }

        let toolchain = self.verify_toolchain(ui)?;

        if replacing {
            ui.message(&format!("Deleting {} ...", venv_dir.display()));
            delete_environment_with(&venv_dir, self.remover)?;
            ui.success("done!");
        }

        let mut steps = vec![self.create_environment_with(ui, &toolchain, &venv_dir)?];

        if self.settings.upgrade_pip {
            steps.push(self.upgrade_installer(ui, &venv_dir)?);
        } else {
            tracing::debug!("Skipping pip upgrade");
        }

        steps.push(self.install_dependencies(ui, &venv_dir, &self.settings.requirements)?);

        Ok(SetupOutcome::Completed(SetupReport {
            venv_dir,
            replaced_existing: replacing,
            toolchain,
            steps,
        }))
    }

    fn require_tool(&self) -> Result<PathBuf> {
        self.tool_location().ok_or_else(|| {
            SetupError::from(InstallationError::ToolNotFound {
                tool: pyenv::PYENV.to_string(),
            })
        })
    }

    /// Run one external step.
    ///
    /// In strict mode a non-zero exit is an error; otherwise it is reported
    /// as a warning and the workflow carries on.
    fn run_step(
        &self,
        ui: &mut dyn UserInterface,
        kind: StepKind,
        spec: CommandSpec,
    ) -> Result<StepReport> {
        let capture = !ui.output_mode().shows_command_output();
        let spec = spec
            .capture_output(capture)
            .current_dir(&self.settings.repo_root);
        let command = spec.display();

        let mut spinner = capture.then(|| ui.start_spinner(kind.label()));

        let result = match self.runner.run(&spec) {
            Ok(result) => result,
            Err(e) => {
                if let Some(spinner) = spinner.as_mut() {
                    spinner.finish_error(kind.label());
                }
                return Err(e);
            }
        };

        let report = StepReport {
            kind,
            command: command.clone(),
            exit_code: result.exit_code,
            success: result.success,
        };

        if result.success {
            if let Some(spinner) = spinner.as_mut() {
                spinner.finish_success(kind.label());
            }
            return Ok(report);
        }

        if let Some(spinner) = spinner.as_mut() {
            spinner.finish_error(kind.label());
        }
        if capture {
            ui.show_error_block(&command, &result.combined_output(), None);
        }

        if self.settings.strict {
            return Err(SetupError::CommandFailed {
                command,
                code: result.exit_code,
            });
        }

        let code = result
            .exit_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none".to_string());
        tracing::warn!("{} exited with code {}: {}", kind.label(), code, command);
        ui.warning(&format!(
            "{} failed (exit code {}); continuing",
            kind.label(),
            code
        ));

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Overrides, SetupConfig};
    use crate::shell::{CommandResult, RecordingRunner};
    use crate::ui::{MockUI, OutputMode};
    use std::cell::Cell;
    use std::fs;
    use std::rc::Rc;
    use std::time::Duration;
    use tempfile::TempDir;

    struct Fixture {
        temp: TempDir,
        bin: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let bin = temp.path().join("bin");
            fs::create_dir_all(&bin).unwrap();
            fs::create_dir_all(temp.path().join("repo/requirements")).unwrap();
            fs::write(temp.path().join("repo/requirements/dev.txt"), "pytest\n").unwrap();
            Self { temp, bin }
        }

        fn repo(&self) -> PathBuf {
            self.temp.path().join("repo")
        }

        fn venv(&self) -> PathBuf {
            self.repo().join(".venv")
        }

        fn install_pyenv(&self) {
            let path = self.bin.join("pyenv");
            fs::write(&path, "#!/bin/sh\n").unwrap();
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            }
        }

        fn settings(&self, overrides: Overrides) -> Settings {
            let pyenv_root = self.temp.path().join("pyenv");
            Settings::resolve(
                &self.repo(),
                &SetupConfig {
                    pyenv_root: Some(pyenv_root),
                    ..Default::default()
                },
                &overrides,
                |_| Err(std::env::VarError::NotPresent),
            )
        }

        /// Runner whose pyenv reports `versions` and whose `-m venv` creates the directory.
        fn runner(&self, versions: &str) -> RecordingRunner {
            RecordingRunner::new()
                .with_search_path(vec![self.bin.clone()])
                .respond(
                    "versions --bare",
                    CommandResult::success(versions.to_string(), String::new(), Duration::ZERO),
                )
                .on_call("-m venv", |spec| {
                    let target = PathBuf::from(spec.args.last().unwrap());
                    fs::create_dir_all(target.join("bin")).unwrap();
                })
        }
    }

    #[test]
    fn fresh_setup_creates_environment_without_prompting() {
        let fx = Fixture::new();
        fx.install_pyenv();
        let bootstrapper = Bootstrapper::new(fx.settings(Overrides::default()), fx.runner("3.10.0\n"));
        let mut ui = MockUI::new();

        let outcome = bootstrapper.set_up_environment(&mut ui).unwrap();

        let SetupOutcome::Completed(report) = outcome else {
            panic!("expected completed setup");
        };
        assert!(!report.replaced_existing);
        assert!(report.all_succeeded());
        assert_eq!(report.steps.len(), 3);
        assert!(ui.prompts_shown().is_empty());
        assert!(fx.venv().is_dir());

        let lines = bootstrapper.runner().command_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("pyenv versions --bare"));
        assert!(lines[1].contains("versions/3.10.0/bin/python -m venv"));
        assert!(lines[2].ends_with("install --upgrade pip"));
        assert!(lines[3].contains("install -r"));
        assert!(lines[3].ends_with("requirements/dev.txt"));
    }

    #[test]
    fn declining_leaves_environment_untouched() {
        let fx = Fixture::new();
        fx.install_pyenv();
        fs::create_dir_all(fx.venv()).unwrap();
        fs::write(fx.venv().join("marker"), "old").unwrap();
        let bootstrapper = Bootstrapper::new(fx.settings(Overrides::default()), fx.runner("3.10.0\n"));
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(OVERWRITE_PROMPT_KEY, vec!["n"]);

        let outcome = bootstrapper.set_up_environment(&mut ui).unwrap();

        assert_eq!(outcome, SetupOutcome::Declined);
        assert_eq!(fs::read_to_string(fx.venv().join("marker")).unwrap(), "old");
        assert!(bootstrapper.runner().calls().is_empty());
        assert!(ui.has_message("Nothing else will be done, bye!"));
    }

    #[test]
    fn accepting_removes_old_environment_before_creation() {
        let fx = Fixture::new();
        fx.install_pyenv();
        fs::create_dir_all(fx.venv()).unwrap();
        let marker = fx.venv().join("marker");
        fs::write(&marker, "old").unwrap();

        let marker_at_create = Rc::new(Cell::new(true));
        let seen = Rc::clone(&marker_at_create);
        let probe = marker.clone();
        let runner = fx
            .runner("3.10.0\n")
            .on_call("-m venv", move |_| seen.set(probe.exists()));

        let bootstrapper = Bootstrapper::new(fx.settings(Overrides::default()), runner);
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(OVERWRITE_PROMPT_KEY, vec!["Y"]);

        let outcome = bootstrapper.set_up_environment(&mut ui).unwrap();

        assert!(!marker_at_create.get());
        assert!(!marker.exists());
        assert!(matches!(
            outcome,
            SetupOutcome::Completed(SetupReport {
                replaced_existing: true,
                ..
            })
        ));
    }

    #[test]
    fn environment_at_repository_root_is_refused() {
        for venv_dir in ["", ".", ".."] {
            let fx = Fixture::new();
            fx.install_pyenv();
            fs::create_dir_all(fx.repo().join("src")).unwrap();
            fs::write(fx.repo().join("src/app.py"), "print('hi')\n").unwrap();
            let overrides = Overrides {
                venv_dir: Some(PathBuf::from(venv_dir)),
                overwrite: OverwritePolicy::Always,
                ..Default::default()
            };
            let bootstrapper = Bootstrapper::new(fx.settings(overrides), fx.runner("3.10.0\n"));
            let mut ui = MockUI::new();

            let err = bootstrapper.set_up_environment(&mut ui).unwrap_err();

            assert!(
                matches!(err, SetupError::UnsafeEnvironmentPath { .. }),
                "venv_dir {:?} was accepted",
                venv_dir
            );
            assert!(fx.repo().join("src/app.py").exists());
            assert!(bootstrapper.runner().calls().is_empty());
        }
    }

    #[test]
    fn environment_left_behind_after_removal_is_fatal() {
        let fx = Fixture::new();
        fx.install_pyenv();
        fs::create_dir_all(fx.venv()).unwrap();
        let overrides = Overrides {
            overwrite: OverwritePolicy::Always,
            ..Default::default()
        };
        let bootstrapper = Bootstrapper::new(fx.settings(overrides), fx.runner("3.10.0\n"))
            .with_remover(|_| Ok(()));
        let mut ui = MockUI::new();

        let err = bootstrapper.set_up_environment(&mut ui).unwrap_err();

        assert!(matches!(err, SetupError::EnvironmentNotRemoved { .. }));
        assert!(fx.venv().exists());
        assert!(!bootstrapper.runner().was_called("-m venv"));
        assert!(!ui.has_success("done!"));
    }

    #[test]
    fn invalid_answers_are_reprompted() {
        let fx = Fixture::new();
        fx.install_pyenv();
        fs::create_dir_all(fx.venv()).unwrap();
        let bootstrapper = Bootstrapper::new(fx.settings(Overrides::default()), fx.runner("3.10.0\n"));
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(OVERWRITE_PROMPT_KEY, vec!["sure", "yes", " ", "n"]);

        let outcome = bootstrapper.set_up_environment(&mut ui).unwrap();

        assert_eq!(outcome, SetupOutcome::Declined);
        assert_eq!(ui.prompts_shown().len(), 4);
    }

    #[test]
    fn missing_tool_fails_without_touching_filesystem() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.venv()).unwrap();
        fs::write(fx.venv().join("marker"), "old").unwrap();
        let bootstrapper = Bootstrapper::new(fx.settings(Overrides::default()), fx.runner("3.10.0\n"));
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(OVERWRITE_PROMPT_KEY, vec!["y"]);

        let err = bootstrapper.set_up_environment(&mut ui).unwrap_err();

        assert!(matches!(
            err,
            SetupError::Installation(InstallationError::ToolNotFound { .. })
        ));
        assert_eq!(err.to_string(), "Couldn't find `pyenv` in PATH");
        assert!(fx.venv().join("marker").exists());
        assert!(bootstrapper.runner().calls().is_empty());
    }

    #[test]
    fn missing_version_cites_install_command() {
        let fx = Fixture::new();
        fx.install_pyenv();
        let bootstrapper = Bootstrapper::new(
            fx.settings(Overrides::default()),
            fx.runner("3.9.7\n3.11.2\n"),
        );
        let mut ui = MockUI::new();

        let err = bootstrapper.set_up_environment(&mut ui).unwrap_err();

        assert!(err.to_string().contains("run: pyenv install 3.10.0"));
        assert!(!fx.venv().exists());
        assert!(!bootstrapper.runner().was_called("-m venv"));
    }

    #[test]
    fn never_policy_declines_without_prompt() {
        let fx = Fixture::new();
        fx.install_pyenv();
        fs::create_dir_all(fx.venv()).unwrap();
        let overrides = Overrides {
            overwrite: OverwritePolicy::Never,
            ..Default::default()
        };
        let bootstrapper = Bootstrapper::new(fx.settings(overrides), fx.runner("3.10.0\n"));
        let mut ui = MockUI::new();

        assert_eq!(
            bootstrapper.set_up_environment(&mut ui).unwrap(),
            SetupOutcome::Declined
        );
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn always_policy_replaces_without_prompt() {
        let fx = Fixture::new();
        fx.install_pyenv();
        fs::create_dir_all(fx.venv()).unwrap();
        let overrides = Overrides {
            overwrite: OverwritePolicy::Always,
            ..Default::default()
        };
        let bootstrapper = Bootstrapper::new(fx.settings(overrides), fx.runner("3.10.0\n"));
        let mut ui = MockUI::new();

        let outcome = bootstrapper.set_up_environment(&mut ui).unwrap();
        assert!(matches!(outcome, SetupOutcome::Completed(_)));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn failing_install_warns_and_keeps_environment() {
        let fx = Fixture::new();
        fx.install_pyenv();
        let runner = fx.runner("3.10.0\n").fail("install -r", 1);
        let bootstrapper = Bootstrapper::new(fx.settings(Overrides::default()), runner);
        let mut ui = MockUI::new();

        let outcome = bootstrapper.set_up_environment(&mut ui).unwrap();

        let SetupOutcome::Completed(report) = outcome else {
            panic!("expected completed setup");
        };
        assert_eq!(report.failed_steps().len(), 1);
        assert_eq!(report.failed_steps()[0].kind, StepKind::InstallDependencies);
        assert!(ui.has_warning("Install dependencies failed (exit code 1)"));
        assert!(fx.venv().exists());
    }

    #[test]
    fn strict_mode_aborts_on_failing_step() {
        let fx = Fixture::new();
        fx.install_pyenv();
        let runner = fx.runner("3.10.0\n").fail("install --upgrade pip", 2);
        let overrides = Overrides {
            strict: Some(true),
            ..Default::default()
        };
        let bootstrapper = Bootstrapper::new(fx.settings(overrides), runner);
        let mut ui = MockUI::new();

        let err = bootstrapper.set_up_environment(&mut ui).unwrap_err();

        assert!(matches!(err, SetupError::CommandFailed { code: Some(2), .. }));
        assert!(!bootstrapper.runner().was_called("install -r"));
    }

    #[test]
    fn skip_upgrade_runs_two_steps() {
        let fx = Fixture::new();
        fx.install_pyenv();
        let overrides = Overrides {
            upgrade_pip: Some(false),
            ..Default::default()
        };
        let bootstrapper = Bootstrapper::new(fx.settings(overrides), fx.runner("3.10.0\n"));
        let mut ui = MockUI::new();

        let SetupOutcome::Completed(report) = bootstrapper.set_up_environment(&mut ui).unwrap()
        else {
            panic!("expected completed setup");
        };
        assert_eq!(report.steps.len(), 2);
        assert!(!bootstrapper.runner().was_called("--upgrade"));
    }

    #[test]
    fn quiet_mode_captures_output_and_shows_error_block() {
        let fx = Fixture::new();
        fx.install_pyenv();
        let runner = fx.runner("3.10.0\n").respond(
            "install -r",
            CommandResult::failure(
                Some(1),
                String::new(),
                "No matching distribution".into(),
                Duration::ZERO,
            ),
        );
        let bootstrapper = Bootstrapper::new(fx.settings(Overrides::default()), runner);
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        bootstrapper.set_up_environment(&mut ui).unwrap();

        assert_eq!(ui.spinners().len(), 3);
        assert_eq!(ui.error_blocks().len(), 1);
        assert!(ui.error_blocks()[0].1.contains("No matching distribution"));
        assert!(bootstrapper.runner().calls().iter().skip(1).all(|c| c.capture));
    }

    #[test]
    fn tool_checks_report_individually() {
        let fx = Fixture::new();
        let bootstrapper = Bootstrapper::new(fx.settings(Overrides::default()), fx.runner("3.10.0\n"));
        assert!(!bootstrapper.tool_available());
        assert!(bootstrapper.tool_has_runtime_version("3.10.0").is_err());

        fx.install_pyenv();
        assert!(bootstrapper.tool_available());
        assert!(bootstrapper.tool_has_runtime_version("3.10.0").unwrap());
        assert!(!bootstrapper.tool_has_runtime_version("3.12.0").unwrap());
    }

    #[test]
    fn create_environment_runs_checks_first() {
        let fx = Fixture::new();
        let bootstrapper = Bootstrapper::new(fx.settings(Overrides::default()), fx.runner(""));
        let mut ui = MockUI::new();

        let err = bootstrapper
            .create_environment(&mut ui, &fx.venv())
            .unwrap_err();
        assert!(matches!(err, SetupError::Installation(_)));
        assert!(!fx.venv().exists());
    }
}
