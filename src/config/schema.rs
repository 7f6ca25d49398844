//! Configuration file schema and resolved settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::toolchain::pyenv;

/// Python version built when nothing else is configured.
pub const DEFAULT_PYTHON_VERSION: &str = "3.10.0";

/// Environment directory, relative to the repository root.
pub const DEFAULT_VENV_DIR: &str = ".venv";

/// Dependency manifest, relative to the repository root.
pub const DEFAULT_REQUIREMENTS: &str = "requirements/dev.txt";

/// Contents of `.venv-setup.yml`.
///
/// Every key is optional; missing keys fall through to the defaults.
///
/// ```yaml
/// python_version: "3.11.4"
/// venv_dir: .venv
/// requirements: requirements/dev.txt
/// pyenv_root: ~/.pyenv
/// upgrade_pip: true
/// strict: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Python version pyenv must provide.
    pub python_version: Option<String>,

    /// Where the environment lives.
    pub venv_dir: Option<PathBuf>,

    /// Dependency manifest installed into the environment.
    pub requirements: Option<PathBuf>,

    /// pyenv installation root (overrides `PYENV_ROOT`).
    pub pyenv_root: Option<PathBuf>,

    /// Upgrade pip before installing dependencies.
    pub upgrade_pip: Option<bool>,

    /// Abort on the first failing external step.
    pub strict: Option<bool>,
}

/// What to do when an environment already exists at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OverwritePolicy {
    /// Ask the user.
    #[default]
    Ask,
    /// Replace it without asking.
    Always,
    /// Keep it and stop.
    Never,
}

/// Values supplied on the command line (or their environment variables).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub python_version: Option<String>,
    pub venv_dir: Option<PathBuf>,
    pub requirements: Option<PathBuf>,
    pub upgrade_pip: Option<bool>,
    pub strict: Option<bool>,
    pub overwrite: OverwritePolicy,
}

/// Fully resolved, immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Repository the environment belongs to.
    pub repo_root: PathBuf,
    /// Absolute environment directory.
    pub venv_dir: PathBuf,
    /// Absolute path of the dependency manifest.
    pub requirements: PathBuf,
    /// Python version pyenv must provide.
    pub python_version: String,
    /// pyenv installation root.
    pub pyenv_root: PathBuf,
    /// Upgrade pip before installing dependencies.
    pub upgrade_pip: bool,
    /// Treat failing external steps as fatal.
    pub strict: bool,
    /// Behavior when the environment already exists.
    pub overwrite: OverwritePolicy,
}

impl Settings {
    /// Settings for `repo_root` with every default applied.
    pub fn defaults(repo_root: &Path) -> Self {
        Self::resolve(
            repo_root,
            &SetupConfig::default(),
            &Overrides::default(),
            |key: &str| std::env::var(key),
        )
    }

    /// Layer defaults, file config and command-line overrides (later wins).
    ///
    /// Relative paths are resolved against `repo_root`. `env_fn` is consulted
    /// for `PYENV_ROOT` when neither layer sets a pyenv root.
    pub fn resolve<F>(repo_root: &Path, file: &SetupConfig, cli: &Overrides, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let venv_dir = cli
            .venv_dir
            .clone()
            .or_else(|| file.venv_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VENV_DIR));

        let requirements = cli
            .requirements
            .clone()
            .or_else(|| file.requirements.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REQUIREMENTS));

        let python_version = cli
            .python_version
            .clone()
            .or_else(|| file.python_version.clone())
            .unwrap_or_else(|| DEFAULT_PYTHON_VERSION.to_string());

        Self {
            repo_root: repo_root.to_path_buf(),
            venv_dir: anchor(repo_root, &venv_dir),
            requirements: anchor(repo_root, &requirements),
            python_version,
            pyenv_root: pyenv::resolve_root(file.pyenv_root.as_deref(), env_fn),
            upgrade_pip: cli.upgrade_pip.or(file.upgrade_pip).unwrap_or(true),
            strict: cli.strict.or(file.strict).unwrap_or(false),
            overwrite: cli.overwrite,
        }
    }
}

fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
