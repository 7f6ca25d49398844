//! Configuration file discovery and loading.

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-repository configuration file.
pub const CONFIG_FILE_NAME: &str = ".venv-setup.yml";

/// Find the repository root by walking up from `start`.
///
/// Looks for:
/// 1. A `.venv-setup.yml` file (primary indicator)
/// 2. A `.git` directory or file (fallback)
///
/// # Returns
///
/// The path to the repository root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SetupError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`SetupConfig`].
///
/// An empty document yields the default (all keys unset).
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the configuration that applies to `repo_root`.
///
/// An explicit path must exist. Without one, `<repo_root>/.venv-setup.yml` is
/// used when present and the defaults otherwise. Returns the config together
/// with the file it came from.
pub fn load_project_config(
    repo_root: &Path,
    explicit: Option<&Path>,
) -> Result<(SetupConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = load_config_file(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    let path = repo_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        tracing::debug!("Loading config from {}", path.display());
        let config = load_config_file(&path)?;
        Ok((config, Some(path)))
    } else {
        Ok((SetupConfig::default(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_project_root_prefers_config_file() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src").join("pkg");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_falls_back_to_git() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("scripts");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn load_config_file_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, SetupError::ConfigNotFound { .. }));
    }

    #[test]
    fn parse_config_reports_path_on_error() {
        let err = parse_config("python_version: [", Path::new("/repo/.venv-setup.yml"))
            .unwrap_err();
        assert!(err.to_string().contains("/repo/.venv-setup.yml"));
    }

    #[test]
    fn parse_config_empty_document_is_default() {
        let config = parse_config("\n", Path::new("x.yml")).unwrap();
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn load_project_config_uses_repo_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "python_version: \"3.11.4\"\n",
        )
        .unwrap();

        let (config, source) = load_project_config(temp.path(), None).unwrap();
        assert_eq!(config.python_version.as_deref(), Some("3.11.4"));
        assert_eq!(source, Some(temp.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn load_project_config_without_file_is_default() {
        let temp = TempDir::new().unwrap();
        let (config, source) = load_project_config(temp.path(), None).unwrap();
        assert_eq!(config, SetupConfig::default());
        assert!(source.is_none());
    }

    #[test]
    fn load_project_config_explicit_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("custom.yml");
        let err = load_project_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, SetupError::ConfigNotFound { .. }));
    }
}
