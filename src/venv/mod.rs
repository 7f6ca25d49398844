//! Virtual environment bootstrapping.
//!
//! - [`bootstrap`] - The setup workflow and its individual operations
//! - [`layout`] - Existence checks, removal and paths inside an environment
//! - [`diagnose`] - Read-only readiness report

pub mod bootstrap;
pub mod diagnose;
pub mod layout;

pub use bootstrap::{
    prompt_overwrite, Bootstrapper, OverwriteDecision, Remover, SetupOutcome, SetupReport,
    StepKind, StepReport, OVERWRITE_PROMPT_KEY,
};
pub use diagnose::Diagnosis;
pub use layout::{
    bin_dir, delete_environment, delete_environment_with, ensure_environment_path,
    environment_exists, pip_path, remove_path,
};
