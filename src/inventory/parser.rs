//! Report parsing.

use std::fs;
use std::path::Path;

use crate::error::{MacsnapError, Result};

use super::report::{is_sentinel, InventoryReport, Section, HEADER_PREFIX};

/// Read a report file.
///
/// Fails with [`MacsnapError::ReportNotFound`] when `path` is not a
/// regular file, before anything is read.
pub fn parse_report(path: &Path) -> Result<InventoryReport> {
    if !path.is_file() {
        return Err(MacsnapError::ReportNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| MacsnapError::ReportRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_str(&text))
}

/// Parse report text.
///
/// Lines are trimmed and blank lines skipped. A recognized header selects
/// the current section; an unrecognized header line is dropped and the
/// current section stays as it was. Lines before the first recognized
/// header are ignored, as are sentinel lines inside a section.
pub fn parse_str(text: &str) -> InventoryReport {
    let mut report = InventoryReport::default();
    let mut current: Option<Section> = None;

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if line.starts_with(HEADER_PREFIX) {
            match Section::from_header(line) {
                Some(section) => current = Some(section),
                None => tracing::debug!("Ignoring unknown header {:?}", line),
            }
            continue;
        }

        let Some(section) = current else {
            continue;
        };

        if is_sentinel(line) {
            continue;
        }

        report.section_mut(section).push(line.to_string());
    }

    report
}
