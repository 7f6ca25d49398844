//! pyenv discovery and version queries.
//!
//! pyenv is frequently installed but not active in non-interactive shells.
//! Lookup therefore only trusts the search path it is given, and the
//! interpreter used to build environments is addressed by its absolute path
//! under the pyenv root rather than through pyenv's shims.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{expand_home, resolve_tool_path, CommandRunner, CommandSpec};

/// Executable name of the version manager.
pub const PYENV: &str = "pyenv";

/// Environment variable that relocates the pyenv installation.
pub const PYENV_ROOT_VAR: &str = "PYENV_ROOT";

/// Default pyenv installation, relative to the home directory.
pub const DEFAULT_PYENV_ROOT: &str = "~/.pyenv";

/// Locate the pyenv executable on the given search path.
pub fn locate(search_path: &[PathBuf]) -> Option<PathBuf> {
    resolve_tool_path(PYENV, search_path)
}

/// Parse `pyenv versions --bare` output into a set of version names.
///
/// Lines are trimmed; blank lines are ignored.
pub fn parse_versions(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Ask pyenv which runtime versions it has installed.
///
/// A non-zero exit is not an error here: whatever pyenv printed is still
/// parsed, and an empty set simply fails the membership check downstream.
pub fn installed_versions(
    runner: &dyn CommandRunner,
    executable: &Path,
) -> Result<BTreeSet<String>> {
    let spec = CommandSpec::new(executable)
        .args(["versions", "--bare"])
        .capture_output(true);
    let result = runner.run(&spec)?;

    if !result.success {
        tracing::warn!(
            "`{}` exited with {:?}: {}",
            spec.display(),
            result.exit_code,
            result.stderr.trim()
        );
    }

    let versions = parse_versions(&result.stdout);
    tracing::debug!("pyenv reports versions: {:?}", versions);
    Ok(versions)
}

/// Resolve the pyenv root directory.
///
/// Checks, in order: an explicit override, the `PYENV_ROOT` variable as
/// returned by `env_fn`, and finally `~/.pyenv`.
pub fn resolve_root<F>(explicit: Option<&Path>, env_fn: F) -> PathBuf
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Some(path) = explicit {
        return expand_home(path);
    }

    match env_fn(PYENV_ROOT_VAR) {
        Ok(val) if !val.trim().is_empty() => expand_home(Path::new(val.trim())),
        _ => expand_home(Path::new(DEFAULT_PYENV_ROOT)),
    }
}

/// Path of the interpreter pyenv installed for `version`.
pub fn interpreter_path(root: &Path, version: &str) -> PathBuf {
    let base = root.join("versions").join(version);
    if cfg!(windows) {
        base.join("python.exe")
    } else {
        base.join("bin").join("python")
    }
}
