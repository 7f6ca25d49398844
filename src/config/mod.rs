//! Configuration loading and resolution.
//!
//! Settings are layered, later layers winning:
//! 1. Built-in defaults (`3.10.0`, `.venv`, `requirements/dev.txt`)
//! 2. The repository's `.venv-setup.yml` (or the file given with `--config`)
//! 3. Command-line flags and their environment variables

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_root, load_config_file, load_project_config, parse_config, CONFIG_FILE_NAME,
};
pub use schema::{
    OverwritePolicy, Overrides, SetupConfig, Settings, DEFAULT_PYTHON_VERSION,
    DEFAULT_REQUIREMENTS, DEFAULT_VENV_DIR,
};
