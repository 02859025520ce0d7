//! Reinstalling software from an inventory report.
//!
//! - [`RestoreExecutor`] - selection, installs, and the manual application list
//! - [`RestoreSummary`] - what happened, for the exit status and for tests

pub mod executor;

pub use executor::{RestoreExecutor, RestoreOptions};

use crate::brew::PackageKind;

/// A package that could not be installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedInstall {
    pub kind: PackageKind,
    pub name: String,
    pub reason: String,
}

/// Result of one restore run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Packages installed successfully, in install order.
    pub installed: Vec<(PackageKind, String)>,
    /// Packages whose install command failed.
    pub failed: Vec<FailedInstall>,
    /// Packages that would have been installed in a dry run.
    pub planned: Vec<(PackageKind, String)>,
    /// Installs stopped early because the package manager is missing.
    pub aborted: bool,
    /// Applications the user must reinstall by hand.
    pub manual: Vec<String>,
}

impl RestoreSummary {
    /// Whether every selected package was installed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && !self.aborted
    }

    /// Names of failed packages, in order.
    pub fn failed_names(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_is_success() {
        assert!(RestoreSummary::default().is_success());
    }

    #[test]
    fn failures_or_abort_are_not_success() {
        let failed = RestoreSummary {
            failed: vec![FailedInstall {
                kind: PackageKind::Formula,
                name: "b".into(),
                reason: "exit code 1".into(),
            }],
            ..Default::default()
        };
        assert!(!failed.is_success());
        assert_eq!(failed.failed_names(), vec!["b"]);

        let aborted = RestoreSummary {
            aborted: true,
            ..Default::default()
        };
        assert!(!aborted.is_success());
    }
}
