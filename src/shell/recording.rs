//! Recording command runner for testing.
//!
//! `RecordingRunner` implements [`CommandRunner`] without spawning anything.
//! Every invocation is recorded; results are scripted by matching a
//! substring of the rendered command line.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use venv_setup::shell::{CommandResult, CommandRunner, CommandSpec, RecordingRunner};
//!
//! let runner = RecordingRunner::new().respond(
//!     "versions --bare",
//!     CommandResult::success("3.10.0\n".into(), String::new(), Duration::ZERO),
//! );
//!
//! let result = runner
//!     .run(&CommandSpec::new("pyenv").args(["versions", "--bare"]))
//!     .unwrap();
//! assert_eq!(result.stdout, "3.10.0\n");
//! assert!(runner.was_called("pyenv versions"));
//! ```

use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;

use super::{CommandResult, CommandRunner, CommandSpec};

type Hook = Box<dyn Fn(&CommandSpec)>;

/// Command runner that records calls and returns scripted results.
///
/// Commands with no matching rule succeed with empty output.
#[derive(Default)]
pub struct RecordingRunner {
    search_path: Vec<PathBuf>,
    rules: Vec<(String, CommandResult)>,
    hooks: Vec<(String, Hook)>,
    calls: RefCell<Vec<CommandSpec>>,
}

impl RecordingRunner {
    /// Create a runner with an empty search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directories returned by [`CommandRunner::search_path`].
    pub fn with_search_path(mut self, path: Vec<PathBuf>) -> Self {
        self.search_path = path;
        self
    }

    /// Return `result` for commands whose display contains `pattern`.
    ///
    /// The first matching rule wins.
    pub fn respond(mut self, pattern: &str, result: CommandResult) -> Self {
        self.rules.push((pattern.to_string(), result));
        self
    }

    /// Exit with `code` for commands whose display contains `pattern`.
    pub fn fail(self, pattern: &str, code: i32) -> Self {
        self.respond(
            pattern,
            CommandResult::failure(Some(code), String::new(), String::new(), Duration::ZERO),
        )
    }

    /// Run `hook` before answering commands whose display contains `pattern`.
    ///
    /// Useful for simulating side effects such as a directory being created.
    pub fn on_call(mut self, pattern: &str, hook: impl Fn(&CommandSpec) + 'static) -> Self {
        self.hooks.push((pattern.to_string(), Box::new(hook)));
        self
    }

    /// All recorded invocations, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    /// Rendered command lines of all recorded invocations.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(CommandSpec::display).collect()
    }

    /// Check whether any recorded invocation contains `pattern`.
    pub fn was_called(&self, pattern: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|spec| spec.display().contains(pattern))
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult> {
        let line = spec.display();
        self.calls.borrow_mut().push(spec.clone());

        for (pattern, hook) in &self.hooks {
            if line.contains(pattern.as_str()) {
                hook(spec);
            }
        }

        let result = self
            .rules
            .iter()
            .find(|(pattern, _)| line.contains(pattern.as_str()))
            .map(|(_, result)| result.clone())
            .unwrap_or_else(|| CommandResult::success(String::new(), String::new(), Duration::ZERO));

        Ok(result)
    }

    fn search_path(&self) -> Vec<PathBuf> {
        self.search_path.clone()
    }
}
