//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use macsnap::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("Parsing software list");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("software list"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Final state of a spinner started on a [`MockUI`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerOutcome {
    /// Still running (never finished).
    Running,
    /// Finished successfully with this message.
    Success(String),
    /// Finished with an error and this message.
    Error(String),
}

/// A spinner captured by [`MockUI`]: start message and outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerRecord {
    pub message: String,
    pub outcome: SpinnerOutcome,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    error_blocks: Vec<(String, String)>,
    spinners: Vec<Rc<RefCell<SpinnerRecord>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured error blocks as (command, output).
    pub fn error_blocks(&self) -> &[(String, String)] {
        &self.error_blocks
    }

    /// Snapshot of every spinner started so far.
    pub fn spinners(&self) -> Vec<SpinnerRecord> {
        self.spinners.iter().map(|s| s.borrow().clone()).collect()
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a spinner finished with an error containing `msg`.
    pub fn has_spinner_error(&self, msg: &str) -> bool {
        self.spinners().iter().any(
            |s| matches!(&s.outcome, SpinnerOutcome::Error(m) if m.contains(msg)),
        )
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let record = Rc::new(RefCell::new(SpinnerRecord {
            message: message.to_string(),
            outcome: SpinnerOutcome::Running,
        }));
        self.spinners.push(Rc::clone(&record));
        Box::new(MockSpinner { record })
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        self.error_blocks
            .push((command.to_string(), output.to_string()));
    }
}

/// Mock spinner that writes its outcome back to the owning [`MockUI`].
#[derive(Debug)]
pub struct MockSpinner {
    record: Rc<RefCell<SpinnerRecord>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.record.borrow_mut().outcome = SpinnerOutcome::Success(msg.to_string());
    }

    fn finish_error(&mut self, msg: &str) {
        self.record.borrow_mut().outcome = SpinnerOutcome::Error(msg.to_string());
    }
}
