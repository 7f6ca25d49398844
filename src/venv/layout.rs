//! Environment directory checks and removal.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SetupError};

/// Whether anything occupies `path`.
///
/// A dangling symlink counts: it would still block creating a new
/// environment at the same location.
pub fn environment_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Remove whatever is at `path` and verify it is gone.
///
/// Directories are removed recursively; a symlink is removed without
/// touching its target.
///
/// # Errors
///
/// Returns `Io` if removal fails and `EnvironmentNotRemoved` if the path
/// still exists afterwards (for example because another process recreated
/// it).
pub fn delete_environment(path: &Path) -> Result<()> {
    delete_environment_with(path, remove_path)
}

/// Remove a directory tree, file or symlink without following links.
pub fn remove_path(path: &Path) -> io::Result<()> {
    if path.symlink_metadata()?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// [`delete_environment`] with a caller-supplied removal step.
///
/// The post-condition is checked no matter what `remove` did.
pub fn delete_environment_with<F>(path: &Path, remove: F) -> Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    remove(path)?;

    if environment_exists(path) {
        return Err(SetupError::EnvironmentNotRemoved {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!("Removed {}", path.display());
    Ok(())
}

/// Reject an environment directory that would swallow the repository.
///
/// The environment is deleted recursively when it is replaced, so it must
/// not be the repository root or any directory containing it. Paths are
/// compared lexically and, when both exist, after resolving symlinks.
///
/// # Errors
///
/// Returns `UnsafeEnvironmentPath` when `venv_dir` contains `repo_root`.
pub fn ensure_environment_path(venv_dir: &Path, repo_root: &Path) -> Result<()> {
    let mut contains_root = normalize(repo_root).starts_with(normalize(venv_dir));

    if !contains_root {
        if let (Ok(env), Ok(root)) = (venv_dir.canonicalize(), repo_root.canonicalize()) {
            contains_root = root.starts_with(env);
        }
    }

    if contains_root {
        return Err(SetupError::UnsafeEnvironmentPath {
            path: venv_dir.to_path_buf(),
            repo_root: repo_root.to_path_buf(),
        });
    }
    Ok(())
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Directory holding the environment's executables.
pub fn bin_dir(env: &Path) -> PathBuf {
    if cfg!(windows) {
        env.join("Scripts")
    } else {
        env.join("bin")
    }
}

/// The environment's own pip.
pub fn pip_path(env: &Path) -> PathBuf {
    if cfg!(windows) {
        bin_dir(env).join("pip.exe")
    } else {
        bin_dir(env).join("pip")
    }
}
