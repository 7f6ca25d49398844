//! External process execution and executable lookup.

pub mod command;
pub mod path;
pub mod recording;

pub use command::{execute, CommandResult, CommandRunner, CommandSpec, SystemRunner};
pub use path::{expand_home, is_executable, parse_system_path, resolve_tool_path};
pub use recording::RecordingRunner;
