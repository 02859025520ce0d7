//! Report serialization.
//!
//! The report is a flat UTF-8 text file with three headered sections in a
//! fixed order. An empty section holds a single sentinel line instead of
//! names:
//!
//! ```text
//! ### macOS Installed Applications ###
//! Safari
//!
//! ### Homebrew Formulae ###
//! git
//!
//! ### Homebrew Casks ###
//! Homebrew not found or no casks installed.
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MacsnapError, Result};

use super::clock::Clock;
use super::report::{InventoryReport, Section};

/// Prefix of every report file name.
pub const FILE_PREFIX: &str = "macos_installed_software_";

/// `chrono` format of the timestamp embedded in file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// File name for a report created at the clock's current time.
pub fn report_file_name(clock: &dyn Clock) -> String {
    format!("{}{}.txt", FILE_PREFIX, clock.now().format(TIMESTAMP_FORMAT))
}

/// Render a report to its text form.
pub fn render(report: &InventoryReport) -> String {
    Section::ALL
        .into_iter()
        .map(|section| render_section(section, report.section(section)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One section: the header, then its entries or the sentinel, each on
/// its own line.
fn render_section(section: Section, entries: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&section.header());
    out.push('\n');

    if entries.is_empty() {
        out.push_str(section.sentinel());
        out.push('\n');
    }
    for entry in entries {
        out.push_str(entry);
        out.push('\n');
    }
    out
}

/// Write a report into `dir` and return the path of the new file.
///
/// An existing file with the same name is overwritten.
pub fn write_report(report: &InventoryReport, dir: &Path, clock: &dyn Clock) -> Result<PathBuf> {
    let path = dir.join(report_file_name(clock));
    tracing::debug!("Writing report to {}", path.display());

    fs::write(&path, render(report)).map_err(|source| MacsnapError::ReportWrite {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
