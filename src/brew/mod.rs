//! Homebrew package manager access.
//!
//! Every call into the package manager returns a [`BrewOutcome`] rather than
//! an error, so callers decide explicitly how to treat a missing `brew`
//! versus a single package that failed.
//!
//! - [`PackageManager`] - trait over the `list` and `install` operations
//! - [`Homebrew`] - production implementation that spawns `brew`
//! - [`MockPackageManager`] - scripted implementation for tests

pub mod client;
pub mod mock;

pub use client::Homebrew;
pub use mock::MockPackageManager;

use std::fmt;

/// The two Homebrew package categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    /// Command-line packages (`brew install <name>`).
    Formula,
    /// Application packages (`brew install --cask <name>`).
    Cask,
}

impl PackageKind {
    /// Arguments for listing installed packages of this kind.
    pub fn list_args(self) -> [&'static str; 2] {
        match self {
            Self::Formula => ["list", "--formula"],
            Self::Cask => ["list", "--cask"],
        }
    }

    /// Arguments for installing one package of this kind.
    pub fn install_args(self, name: &str) -> Vec<&str> {
        match self {
            Self::Formula => vec!["install", name],
            Self::Cask => vec!["install", "--cask", name],
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formula => write!(f, "formula"),
            Self::Cask => write!(f, "cask"),
        }
    }
}

/// Outcome of one package manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrewOutcome {
    /// The command exited with status 0.
    Success { stdout: String },
    /// The package manager itself could not be started.
    ToolMissing,
    /// The command ran and failed.
    ItemFailed {
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl BrewOutcome {
    /// Whether the command succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Short human description of a failure, used in progress messages.
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::ToolMissing => Some("package manager not found".to_string()),
            Self::ItemFailed {
                exit_code: Some(code),
                ..
            } => Some(format!("exit code {}", code)),
            Self::ItemFailed {
                exit_code: None,
                stderr,
            } if !stderr.trim().is_empty() => Some(stderr.trim().to_string()),
            Self::ItemFailed { exit_code: None, .. } => Some("terminated by signal".to_string()),
        }
    }
}

/// Access to a package manager's list and install operations.
pub trait PackageManager {
    /// Program name used in user-facing messages and command lines.
    fn program(&self) -> &str;

    /// List installed packages of one kind.
    fn list(&self, kind: PackageKind) -> BrewOutcome;

    /// Install one package.
    fn install(&self, kind: PackageKind, name: &str) -> BrewOutcome;
}

/// Split `brew list` output into package names.
///
/// Names are trimmed and blank lines dropped; nothing else is normalized.
pub fn parse_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
