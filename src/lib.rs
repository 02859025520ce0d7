//! macsnap - snapshot and restore installed macOS software.
//!
//! `macsnap` writes a flat text report of installed application bundles and
//! Homebrew formulae and casks, and later reinstalls the Homebrew packages
//! from such a report, listing the applications that need manual attention.
//!
//! # Modules
//!
//! - [`brew`] - Homebrew access behind the [`brew::PackageManager`] trait
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file and overrides
//! - [`error`] - Error types and result aliases
//! - [`inventory`] - Scanning, the report format, and parsing
//! - [`restore`] - Selection and reinstallation
//! - [`selection`] - Checklist and pass-through selectors
//! - [`shell`] - Program execution
//! - [`ui`] - Terminal output, spinners, and test doubles
//!
//! # Example
//!
//! ```
//! use macsnap::brew::MockPackageManager;
//! use macsnap::inventory::parse_str;
//! use macsnap::restore::{RestoreExecutor, RestoreOptions};
//! use macsnap::selection::PassThroughSelector;
//! use macsnap::ui::MockUI;
//!
//! let report = parse_str("### Homebrew Formulae ###\nwget\ngit\n");
//! let brew = MockPackageManager::new();
//! let mut ui = MockUI::new();
//!
//! let summary = RestoreExecutor::new(&brew, &PassThroughSelector, RestoreOptions::default())
//!     .restore(report, &mut ui)
//!     .unwrap();
//! assert_eq!(brew.installed_names(), vec!["wget", "git"]);
//! assert!(summary.is_success());
//! ```

pub mod brew;
pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod restore;
pub mod selection;
pub mod shell;
pub mod ui;

pub use error::{MacsnapError, Result};
