//! Plain UI for piped input and headless environments.

use std::io::{self, BufRead, BufReader, Write};

use crate::error::{Result, SetupError};

use super::{OutputMode, ProgressSpinner, Prompt, SpinnerHandle, UserInterface};

/// UI implementation used when stdin is not a terminal.
///
/// Output is unstyled. Prompts print the question and read one line from the
/// input stream, so `printf 'y\n' | venv-setup` works the way a terminal
/// user answering the question would.
pub struct NonInteractiveUI {
    mode: OutputMode,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a UI that reads answers from stdin.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_input(mode, Box::new(BufReader::new(io::stdin())))
    }

    /// Create with an explicit input stream (for testing).
    pub fn with_input(mode: OutputMode, input: Box<dyn BufRead>) -> Self {
        Self { mode, input }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_hint(&mut self, hint: &str) {
        eprintln!("  {}", hint);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        print!("{} ", prompt.question);
        io::stdout().flush().ok();

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Err(SetupError::PromptClosed {
                question: prompt.question.clone(),
            });
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(ProgressSpinner::hidden())
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        eprintln!("  Command: {}", command);
        for line in output.lines() {
            eprintln!("  | {}", line);
        }
        if let Some(h) = hint {
            eprintln!("  Hint: {}", h);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
