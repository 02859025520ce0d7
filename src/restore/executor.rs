//! Restore execution.
//!
//! Formulae are selected and then casks; then every selected formula is
//! installed before any cask. A failing package is reported and skipped. A
//! missing package manager stops all remaining installs, since both
//! categories go through the same program. Applications are never
//! installed; they are listed last for the user to handle.

use std::time::Instant;

use crate::brew::{BrewOutcome, PackageKind, PackageManager};
use crate::error::Result;
use crate::inventory::InventoryReport;
use crate::selection::Selector;
use crate::shell::format_command;
use crate::ui::{format_counter, format_duration, UserInterface};

use super::{FailedInstall, RestoreSummary};

/// Options for a restore run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestoreOptions {
    /// Print the install commands instead of running them.
    pub dry_run: bool,
}

/// Drives selection and installation for one report.
pub struct RestoreExecutor<'a> {
    brew: &'a dyn PackageManager,
    selector: &'a dyn Selector,
    options: RestoreOptions,
}

/// Whether a batch ran to the end or hit a missing package manager.
enum Batch {
    Completed,
    ToolMissing,
}

impl<'a> RestoreExecutor<'a> {
    /// Create an executor.
    pub fn new(
        brew: &'a dyn PackageManager,
        selector: &'a dyn Selector,
        options: RestoreOptions,
    ) -> Self {
        Self {
            brew,
            selector,
            options,
        }
    }

    /// Restore everything in `report`.
    ///
    /// Only a failing selection prompt returns an error; install problems
    /// are reported through `ui` and recorded in the summary.
    pub fn restore(
        &self,
        report: InventoryReport,
        ui: &mut dyn UserInterface,
    ) -> Result<RestoreSummary> {
        if !self.selector.is_interactive() && report.has_packages() {
            ui.warning(
                "NOTE: Interactive selection is unavailable. Proceeding to install all items...",
            );
        }

        let InventoryReport {
            applications,
            formulae,
            casks,
        } = report;

        let formulae = self.choose(PackageKind::Formula, formulae, ui)?;
        let casks = self.choose(PackageKind::Cask, casks, ui)?;

        let mut summary = RestoreSummary::default();

        for (kind, names) in [(PackageKind::Formula, formulae), (PackageKind::Cask, casks)] {
            if let Batch::ToolMissing = self.install_all(kind, &names, ui, &mut summary) {
                summary.aborted = true;
                break;
            }
        }

        if !applications.is_empty() {
            ui.show_header("Manual Application Installation Required");
            ui.message("The following applications cannot be installed automatically.");
            ui.message("Please install them manually from the App Store or developer websites:");
            for app in &applications {
                ui.message(&format!("  - {}", app));
            }
        }
        summary.manual = applications;

        if !summary.failed.is_empty() {
            ui.warning(&format!(
                "{} package(s) failed to install: {}",
                summary.failed.len(),
                summary.failed_names().join(", ")
            ));
        }

        if summary.aborted {
            ui.warning("Restore stopped before all packages were installed.");
        } else {
            ui.success("Restore process complete.");
        }

        Ok(summary)
    }

    fn choose(
        &self,
        kind: PackageKind,
        names: Vec<String>,
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<String>> {
        if names.is_empty() {
            return Ok(names);
        }

        let selected = self.selector.select(&selection_title(kind), &names)?;
        let skipped = names.len().saturating_sub(selected.len());
        if skipped > 0 {
            ui.message(&format!(
                "Skipping {} unselected {}",
                skipped,
                plural_label(kind)
            ));
        }
        Ok(selected)
    }

    fn install_all(
        &self,
        kind: PackageKind,
        names: &[String],
        ui: &mut dyn UserInterface,
        summary: &mut RestoreSummary,
    ) -> Batch {
        if names.is_empty() {
            return Batch::Completed;
        }

        ui.show_header(&format!("Installing Homebrew {}", section_label(kind)));
        let program = self.brew.program();

        for (i, name) in names.iter().enumerate() {
            let command = format_command(program, &kind.install_args(name));

            if self.options.dry_run {
                ui.message(&format!("Would run: {}", command));
                summary.planned.push((kind, name.clone()));
                continue;
            }

            let mut spinner = ui.start_spinner(&format!(
                "{} Installing brew {} '{}'...",
                format_counter(i + 1, names.len()),
                kind,
                name
            ));
            let start = Instant::now();

            match self.brew.install(kind, name) {
                BrewOutcome::Success { .. } => {
                    spinner.finish_success(&format!(
                        "Installed {} '{}' ({})",
                        kind,
                        name,
                        format_duration(start.elapsed())
                    ));
                    summary.installed.push((kind, name.clone()));
                }
                BrewOutcome::ToolMissing => {
                    spinner.finish_error(&format!("Could not install '{}'", name));
                    ui.error(&format!(
                        "'{}' command not found. Please install Homebrew first.",
                        program
                    ));
                    return Batch::ToolMissing;
                }
                outcome @ BrewOutcome::ItemFailed { .. } => {
                    let reason = outcome.failure_reason().unwrap_or_default();
                    spinner.finish_error(&format!(
                        "Failed to install '{}': {}. Continuing...",
                        name, reason
                    ));
                    if let BrewOutcome::ItemFailed { stderr, .. } = &outcome {
                        if !stderr.trim().is_empty() {
                            ui.show_error_block(&command, stderr);
                        }
                    }
                    tracing::debug!("{} '{}' failed: {}", kind, name, reason);
                    summary.failed.push(FailedInstall {
                        kind,
                        name: name.clone(),
                        reason,
                    });
                }
            }
        }

        Batch::Completed
    }
}

fn selection_title(kind: PackageKind) -> String {
    format!("Select Homebrew {} to install", section_label(kind))
}

fn section_label(kind: PackageKind) -> &'static str {
    match kind {
        PackageKind::Formula => "Formulae",
        PackageKind::Cask => "Casks",
    }
}

fn plural_label(kind: PackageKind) -> &'static str {
    match kind {
        PackageKind::Formula => "formulae",
        PackageKind::Cask => "casks",
    }
}
