//! Program execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{execute, execute_quiet, format_command, CommandOptions, CommandResult};
pub use platform::{is_ci, is_macos};
