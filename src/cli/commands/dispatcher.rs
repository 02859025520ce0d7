//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the selected mode

use crate::brew::Homebrew;
use crate::cli::args::{Cli, Mode};
use crate::config::Settings;
use crate::error::Result;
use crate::inventory::SystemClock;
use crate::restore::RestoreOptions;
use crate::selection::create_selector;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::index::IndexCommand;
use super::restore::RestoreCommand;

/// Exit code when the report given to `--restore` does not exist.
pub const EXIT_REPORT_NOT_FOUND: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches the selected mode to its command.
pub struct CommandDispatcher {
    settings: Settings,
    interactive: bool,
}

impl CommandDispatcher {
    /// Create a dispatcher.
    ///
    /// `interactive` allows the selection checklist; it is still skipped
    /// when stdout is not a terminal.
    pub fn new(settings: Settings, interactive: bool) -> Self {
        Self {
            settings,
            interactive,
        }
    }

    /// Resolved settings for this run.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute the mode selected on the command line.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match cli.mode() {
            Mode::Index => {
                let brew = Homebrew::new(self.settings.brew.as_str());
                IndexCommand::new(&self.settings, &brew, &SystemClock).execute(ui)
            }
            Mode::Restore(path) => {
                let brew = Homebrew::new(self.settings.brew.as_str())
                    .stream_output(ui.output_mode().shows_command_output());
                let selector = create_selector(self.interactive);
                let options = RestoreOptions {
                    dry_run: cli.dry_run,
                };
                RestoreCommand::new(path, &brew, selector.as_ref(), options).execute(ui)
            }
            Mode::Completions(shell) => CompletionsCommand::new(shell).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_keeps_settings() {
        let settings = Settings {
            brew: "fake-brew".to_string(),
            ..Settings::default()
        };
        let dispatcher = CommandDispatcher::new(settings, false);
        assert_eq!(dispatcher.settings().brew, "fake-brew");
    }

    #[test]
    fn missing_restore_file_exits_with_two() {
        let cli = Cli::try_parse_from(["macsnap", "--restore", "/nonexistent/list.txt"]).unwrap();
        let dispatcher = CommandDispatcher::new(Settings::default(), false);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_REPORT_NOT_FOUND);
        assert!(ui.has_error("File not found at '/nonexistent/list.txt'"));
    }
}
