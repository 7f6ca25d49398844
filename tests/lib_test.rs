//! Library integration tests.

use venv_setup::{InstallationError, SetupError};

#[test]
fn error_types_are_public() {
    let err: SetupError = InstallationError::ToolNotFound {
        tool: "pyenv".into(),
    }
    .into();
    assert_eq!(err.to_string(), "Couldn't find `pyenv` in PATH");
    assert!(err.hint().is_some());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> venv_setup::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use venv_setup::cli::{Cli, Commands};

    let cli = Cli::parse_from(["venv-setup", "check", "--json"]);

    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn release_profile_is_optimized() {
    let cargo_toml = include_str!("../Cargo.toml");
    assert!(cargo_toml.contains("[profile.release]"));
    assert!(cargo_toml.contains("lto = true"));
    assert!(cargo_toml.contains("strip = true"));
}
