//! Index command.
//!
//! Scans installed software and writes a timestamped report.

use crate::brew::PackageManager;
use crate::config::Settings;
use crate::error::Result;
use crate::inventory::{write_report, Clock, Collector};
use crate::shell::is_macos;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The index command implementation.
pub struct IndexCommand<'a> {
    settings: &'a Settings,
    brew: &'a dyn PackageManager,
    clock: &'a dyn Clock,
}

impl<'a> IndexCommand<'a> {
    /// Create a new index command.
    pub fn new(settings: &'a Settings, brew: &'a dyn PackageManager, clock: &'a dyn Clock) -> Self {
        Self {
            settings,
            brew,
            clock,
        }
    }
}

impl Command for IndexCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Running in Index Mode");

        if !is_macos() {
            ui.warning("Not running on macOS; the report will likely be incomplete.");
        }

        let collector = Collector::new(self.settings.application_dirs.clone(), self.brew);

        let mut spinner = ui.start_spinner("Scanning applications and Homebrew packages...");
        let report = collector.collect();
        spinner.finish_success(&format!(
            "Found {} applications, {} formulae, {} casks",
            report.applications.len(),
            report.formulae.len(),
            report.casks.len()
        ));

        let path = write_report(&report, &self.settings.output_dir, self.clock)?;
        ui.success(&format!("Report saved to: {}", path.display()));

        Ok(CommandResult::success())
    }
}
