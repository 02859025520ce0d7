//! Scripted package manager for tests.
//!
//! `MockPackageManager` implements [`PackageManager`] without spawning
//! anything. Listings and per-package failures are configured up front and
//! every install attempt is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use macsnap::brew::{BrewOutcome, MockPackageManager, PackageKind, PackageManager};
//!
//! let brew = MockPackageManager::new().fail_install("b");
//!
//! assert!(brew.install(PackageKind::Formula, "a").is_success());
//! assert!(!brew.install(PackageKind::Formula, "b").is_success());
//! assert_eq!(brew.installed_names(), vec!["a", "b"]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::{BrewOutcome, PackageKind, PackageManager};

/// Package manager double that records install attempts.
#[derive(Debug, Default)]
pub struct MockPackageManager {
    listings: HashMap<PackageKind, Vec<String>>,
    failing_lists: HashSet<PackageKind>,
    failing_installs: HashSet<String>,
    tool_missing: bool,
    installs: RefCell<Vec<(PackageKind, String)>>,
    list_calls: RefCell<Vec<PackageKind>>,
}

impl MockPackageManager {
    /// Create a mock where every call succeeds and listings are empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that behaves as if the program is not installed.
    pub fn missing() -> Self {
        Self {
            tool_missing: true,
            ..Self::default()
        }
    }

    /// Set the names returned by `list` for a kind.
    pub fn with_listing(mut self, kind: PackageKind, names: &[&str]) -> Self {
        self.listings
            .insert(kind, names.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Make `list` for a kind exit non-zero.
    pub fn fail_list(mut self, kind: PackageKind) -> Self {
        self.failing_lists.insert(kind);
        self
    }

    /// Make installing this name exit non-zero.
    pub fn fail_install(mut self, name: &str) -> Self {
        self.failing_installs.insert(name.to_string());
        self
    }

    /// All install attempts, in order.
    pub fn installs(&self) -> Vec<(PackageKind, String)> {
        self.installs.borrow().clone()
    }

    /// Names of all install attempts, in order.
    pub fn installed_names(&self) -> Vec<String> {
        self.installs
            .borrow()
            .iter()
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Kinds passed to `list`, in order.
    pub fn list_calls(&self) -> Vec<PackageKind> {
        self.list_calls.borrow().clone()
    }
}

impl PackageManager for MockPackageManager {
    fn program(&self) -> &str {
        "brew"
    }

    fn list(&self, kind: PackageKind) -> BrewOutcome {
        self.list_calls.borrow_mut().push(kind);

        if self.tool_missing {
            return BrewOutcome::ToolMissing;
        }
        if self.failing_lists.contains(&kind) {
            return BrewOutcome::ItemFailed {
                exit_code: Some(1),
                stderr: "Error: listing failed".to_string(),
            };
        }

        let stdout = self
            .listings
            .get(&kind)
            .map(|names| names.iter().map(|n| format!("{}\n", n)).collect())
            .unwrap_or_default();
        BrewOutcome::Success { stdout }
    }

    fn install(&self, kind: PackageKind, name: &str) -> BrewOutcome {
        if self.tool_missing {
            return BrewOutcome::ToolMissing;
        }

        self.installs.borrow_mut().push((kind, name.to_string()));

        if self.failing_installs.contains(name) {
            BrewOutcome::ItemFailed {
                exit_code: Some(1),
                stderr: format!("Error: No available {} with the name \"{}\".", kind, name),
            }
        } else {
            BrewOutcome::Success {
                stdout: String::new(),
            }
        }
    }
}
