//! Homebrew CLI client.

use crate::error::Result;
use crate::shell::{execute, execute_quiet, format_command, CommandOptions, CommandResult};

use super::{BrewOutcome, PackageKind, PackageManager};

/// Drives the `brew` executable.
#[derive(Debug, Clone)]
pub struct Homebrew {
    program: String,
    stream_output: bool,
}

impl Homebrew {
    /// Create a client for the given program name or path.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            stream_output: false,
        }
    }

    /// Let install output reach the terminal instead of capturing it.
    pub fn stream_output(mut self, stream: bool) -> Self {
        self.stream_output = stream;
        self
    }

    fn outcome(&self, result: Result<CommandResult>) -> BrewOutcome {
        match result {
            Ok(result) => outcome_from(result),
            Err(e) if e.is_program_missing() => {
                tracing::debug!("'{}' is not installed", self.program);
                BrewOutcome::ToolMissing
            }
            Err(e) => {
                tracing::warn!("{}", e);
                BrewOutcome::ItemFailed {
                    exit_code: None,
                    stderr: e.to_string(),
                }
            }
        }
    }
}

impl Default for Homebrew {
    fn default() -> Self {
        Self::new("brew")
    }
}

impl PackageManager for Homebrew {
    fn program(&self) -> &str {
        &self.program
    }

    fn list(&self, kind: PackageKind) -> BrewOutcome {
        self.outcome(execute_quiet(&self.program, &kind.list_args()))
    }

    fn install(&self, kind: PackageKind, name: &str) -> BrewOutcome {
        let args = kind.install_args(name);
        tracing::debug!("Installing {}: {}", kind, format_command(&self.program, &args));
        let options = CommandOptions {
            capture_output: !self.stream_output,
        };
        self.outcome(execute(&self.program, &args, &options))
    }
}

fn outcome_from(result: CommandResult) -> BrewOutcome {
    if result.success {
        BrewOutcome::Success {
            stdout: result.stdout,
        }
    } else {
        BrewOutcome::ItemFailed {
            exit_code: result.exit_code,
            stderr: result.stderr,
        }
    }
}
