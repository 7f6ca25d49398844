//! Shell completions generation.
//!
//! The `venv-setup completions` command prints a completion script.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Binary name completions are registered for.
const BIN_NAME: &str = "venv-setup";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        write_completions(self.args.shell, &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_registers_binary() {
        let output = render(Shell::Bash);
        assert!(output.contains("venv-setup"));
        assert!(output.contains("complete"));
        assert!(output.contains("--overwrite"));
    }

    #[test]
    fn zsh_script_lists_subcommands() {
        let output = render(Shell::Zsh);
        assert!(output.contains("venv-setup"));
        assert!(output.contains("check"));
    }

    #[test]
    fn fish_script_is_generated() {
        assert!(render(Shell::Fish).contains("venv-setup"));
    }
}
