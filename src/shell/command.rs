//! Program execution.

use crate::error::{MacsnapError, Result};
use std::process::{Command, Stdio};
use std::time::Instant;

/// Result of running a program to completion.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output. Empty unless output was captured.
    pub stdout: String,

    /// Standard error. Empty unless output was captured.
    pub stderr: String,

    /// Whether the program exited with status 0.
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Capture stdout and stderr. When false both are inherited so the
    /// program's own progress output reaches the terminal.
    pub capture_output: bool,
}

/// Render a program and its arguments for display and logs.
pub fn format_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a program with arguments and wait for it to exit.
///
/// The program is spawned directly, not through a shell, so names taken
/// from a report can never be interpreted as shell syntax. A program that
/// cannot be started yields [`MacsnapError::CommandSpawn`]; a program that
/// runs and exits non-zero yields `Ok` with `success == false`.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let rendered = format_command(program, args);
    tracing::debug!("Running: {}", rendered);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if options.capture_output {
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|source| MacsnapError::CommandSpawn {
        command: rendered.clone(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        rendered,
        output.status.code(),
        start.elapsed()
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

/// Run a program and collect its output without showing it.
pub fn execute_quiet(program: &str, args: &[&str]) -> Result<CommandResult> {
    let options = CommandOptions {
        capture_output: true,
    };
    execute(program, args, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_command_joins_program_and_args() {
        assert_eq!(
            format_command("brew", &["install", "--cask", "firefox"]),
            "brew install --cask firefox"
        );
        assert_eq!(format_command("brew", &[]), "brew");
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_program() {
        let result = execute_quiet("echo", &["hello"]).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_program() {
        let result = execute_quiet("sh", &["-c", "echo oops >&2; exit 3"]).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("oops"));
    }

    #[cfg(unix)]
    #[test]
    fn arguments_are_not_shell_expanded() {
        let result = execute_quiet("echo", &["$HOME; exit 1"]).unwrap();

        assert!(result.success);
        assert_eq!(result.stdout.trim(), "$HOME; exit 1");
    }

    #[cfg(unix)]
    #[test]
    fn uncaptured_output_is_empty() {
        let result = execute("true", &[], &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = execute_quiet("macsnap-definitely-not-a-real-program", &["list"]).unwrap_err();

        assert!(err.is_program_missing());
        assert!(err
            .to_string()
            .contains("macsnap-definitely-not-a-real-program list"));
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_with_no_output() {
        let result = execute_quiet("false", &[]).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
        assert!(result.stdout.is_empty());
    }
}
