//! Restore command.
//!
//! Parses a report and hands it to the [`RestoreExecutor`].

use std::path::PathBuf;

use crate::brew::PackageManager;
use crate::error::{MacsnapError, Result};
use crate::inventory::parse_report;
use crate::restore::{RestoreExecutor, RestoreOptions};
use crate::selection::Selector;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_REPORT_NOT_FOUND};

/// The restore command implementation.
pub struct RestoreCommand<'a> {
    path: PathBuf,
    brew: &'a dyn PackageManager,
    selector: &'a dyn Selector,
    options: RestoreOptions,
}

impl<'a> RestoreCommand<'a> {
    /// Create a new restore command.
    pub fn new(
        path: PathBuf,
        brew: &'a dyn PackageManager,
        selector: &'a dyn Selector,
        options: RestoreOptions,
    ) -> Self {
        Self {
            path,
            brew,
            selector,
            options,
        }
    }
}

impl Command for RestoreCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = match parse_report(&self.path) {
            Ok(report) => report,
            Err(e @ MacsnapError::ReportNotFound { .. }) => {
                ui.error(&format!("Error: {}", e));
                return Ok(CommandResult::failure(EXIT_REPORT_NOT_FOUND));
            }
            Err(e) => return Err(e),
        };

        ui.show_header(&format!(
            "Parsing software list from {}",
            self.path.display()
        ));
        ui.message(&format!(
            "Found {} applications, {} formulae, {} casks",
            report.applications.len(),
            report.formulae.len(),
            report.casks.len()
        ));

        let executor = RestoreExecutor::new(self.brew, self.selector, self.options);
        let summary = executor.restore(report, ui)?;

        if summary.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brew::MockPackageManager;
    use crate::selection::PassThroughSelector;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const REPORT: &str = "### macOS Installed Applications ###\n\
        Safari\n\
        \n\
        ### Homebrew Formulae ###\n\
        a\n\
        b\n\
        c\n\
        \n\
        ### Homebrew Casks ###\n\
        Homebrew not found or no casks installed.\n";

    fn write(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("list.txt");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn missing_file_installs_nothing() {
        let brew = MockPackageManager::new();
        let cmd = RestoreCommand::new(
            PathBuf::from("/nonexistent/path"),
            &brew,
            &PassThroughSelector,
            RestoreOptions::default(),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("File not found at '/nonexistent/path'"));
        assert!(brew.installs().is_empty());
    }

    #[test]
    fn directory_is_not_a_report() {
        let temp = TempDir::new().unwrap();
        let brew = MockPackageManager::new();
        let cmd = RestoreCommand::new(
            temp.path().to_path_buf(),
            &brew,
            &PassThroughSelector,
            RestoreOptions::default(),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(brew.installs().is_empty());
    }

    #[test]
    fn failed_item_gives_exit_one() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, REPORT);
        let brew = MockPackageManager::new().fail_install("b");
        let cmd = RestoreCommand::new(path, &brew, &PassThroughSelector, RestoreOptions::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(brew.installed_names(), vec!["a", "b", "c"]);
        assert!(ui.has_message("  - Safari"));
    }

    #[test]
    fn clean_restore_succeeds() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, REPORT);
        let brew = MockPackageManager::new();
        let cmd = RestoreCommand::new(path, &brew, &PassThroughSelector, RestoreOptions::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Found 1 applications, 3 formulae, 0 casks"));
        assert!(ui.has_success("Restore process complete."));
    }
}
