//! Prompts and answer validation.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{Result, SetupError};

use super::{Prompt, UserInterface};

/// Convert dialoguer errors to SetupError.
fn map_dialoguer_err(e: dialoguer::Error) -> SetupError {
    SetupError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Read one line of free-form input on the terminal.
///
/// Empty input is allowed so that the caller decides what is valid.
pub fn prompt_line(prompt: &Prompt, term: &Term) -> Result<String> {
    Input::<String>::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .report(false)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

/// Interpret a yes/no answer.
///
/// Only `y` and `n` are accepted, in either case and with surrounding
/// whitespace ignored. Anything else, including `yes`, is `None`.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

/// Ask until the user answers `y` or `n`.
///
/// There is no retry limit; the loop only ends on a valid answer or when the
/// UI reports that input is closed.
pub fn ask_yes_no(ui: &mut dyn UserInterface, prompt: &Prompt) -> Result<bool> {
    loop {
        let answer = ui.prompt(prompt)?;
        match parse_yes_no(&answer) {
            Some(decision) => return Ok(decision),
            None => tracing::debug!("Rejected answer {:?} to '{}'", answer, prompt.key),
        }
    }
}
