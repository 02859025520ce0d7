//! Non-interactive UI for pipes, CI and headless environments.

use super::{MacsnapTheme, OutputMode, PlainSpinner, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes plain lines: status to stdout, warnings and errors to stderr.
/// No spinners are animated.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: MacsnapTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: MacsnapTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_headers() {
            println!("\n--- {} ---", title);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(PlainSpinner::start(
            message,
            self.mode.shows_headers(),
            self.theme.clone(),
        ))
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        eprintln!("    Command: {}", command);
        for line in output.trim_end().lines() {
            eprintln!("    | {}", line);
        }
    }
}
