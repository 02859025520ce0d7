//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. The
//! [`CommandDispatcher`] builds the package manager client and selector for
//! the chosen mode and runs the matching command.

pub mod completions;
pub mod dispatcher;
pub mod index;
pub mod restore;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_REPORT_NOT_FOUND};
