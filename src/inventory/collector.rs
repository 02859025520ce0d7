//! Installed software discovery.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::brew::{parse_listing, BrewOutcome, PackageKind, PackageManager};

use super::report::InventoryReport;

/// File name suffix of application bundles.
pub const BUNDLE_SUFFIX: &str = ".app";

/// Gathers an [`InventoryReport`] from application folders and the
/// package manager.
pub struct Collector<'a> {
    application_dirs: Vec<PathBuf>,
    brew: &'a dyn PackageManager,
}

impl<'a> Collector<'a> {
    /// Create a collector scanning `application_dirs` and querying `brew`.
    pub fn new(application_dirs: Vec<PathBuf>, brew: &'a dyn PackageManager) -> Self {
        Self {
            application_dirs,
            brew,
        }
    }

    /// Collect the full inventory.
    ///
    /// Never fails: missing folders are skipped and a failing package
    /// listing yields an empty category.
    pub fn collect(&self) -> InventoryReport {
        InventoryReport::new(
            scan_applications(&self.application_dirs),
            self.packages(PackageKind::Formula),
            self.packages(PackageKind::Cask),
        )
    }

    /// Installed packages of one kind, or nothing if the listing fails.
    pub fn packages(&self, kind: PackageKind) -> Vec<String> {
        match self.brew.list(kind) {
            BrewOutcome::Success { stdout } => parse_listing(&stdout),
            other => {
                tracing::debug!(
                    "Listing {} packages failed ({}); recording none",
                    kind,
                    other.failure_reason().unwrap_or_default()
                );
                Vec::new()
            }
        }
    }
}

/// Application names found in `dirs`, deduplicated and sorted.
pub fn scan_applications(dirs: &[PathBuf]) -> Vec<String> {
    let mut names = BTreeSet::new();
    for dir in dirs {
        scan_dir(dir, &mut names);
    }
    names.into_iter().collect()
}

fn scan_dir(dir: &Path, names: &mut BTreeSet<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Skipping {}: {}", dir.display(), e);
            return;
        }
    };

    tracing::debug!("Scanning {}", dir.display());
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if let Some(name) = bundle_name(&entry.file_name().to_string_lossy()) {
            names.insert(name.to_string());
        }
    }
}

/// Application name for a bundle file name, if it is one.
pub fn bundle_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(BUNDLE_SUFFIX)
        .filter(|name| !name.is_empty())
}
