//! Version manager integration.
//!
//! - [`pyenv`] - Locating pyenv, listing its runtimes, resolving interpreters
//! - [`Toolchain`] - Proof that both toolchain checks passed

pub mod pyenv;

use std::path::PathBuf;

/// A verified toolchain: pyenv was found and has the requested runtime.
///
/// Produced by [`crate::venv::Bootstrapper::verify_toolchain`] once both
/// installation checks have passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Resolved pyenv executable.
    pub manager: PathBuf,
    /// Runtime version that was confirmed installed.
    pub version: String,
    /// Interpreter used to materialize environments.
    pub interpreter: PathBuf,
}
