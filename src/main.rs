//! venv-setup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use venv_setup::cli::{Cli, CommandDispatcher};
use venv_setup::config::find_project_root;
use venv_setup::logging::{init_tracing, log_command};
use venv_setup::ui::{create_ui, detect_interactive, OutputMode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.debug, cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }

    tracing::debug!("venv-setup starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let cwd = std::env::current_dir().unwrap_or_default();
    let project_root = cli
        .project
        .clone()
        .or_else(|| find_project_root(&cwd))
        .unwrap_or(cwd);
    tracing::debug!("Repository root: {}", project_root.display());

    let mut ui = create_ui(detect_interactive(), output_mode);

    let dispatcher = CommandDispatcher::new(project_root).with_config(cli.config.clone());
    let command_name = match &cli.command {
        Some(command) => format!("{:?}", command),
        None => "setup".to_string(),
    };

    match log_command(&command_name, || dispatcher.dispatch(&cli, ui.as_mut())) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            tracing::debug!("Command failed: {}", e);
            ui.error(&format!("Error: {}", e));
            if let Some(hint) = e.hint() {
                ui.show_hint(&hint);
            }
            ExitCode::from(1)
        }
    }
}
