//! Software inventory: discovery, the report file format, and parsing.
//!
//! - [`collector`] - scans application folders and queries the package manager
//! - [`writer`] - renders a report to its timestamped text file
//! - [`parser`] - reads a report file back
//! - [`report`] - the [`InventoryReport`] type and section markers
//! - [`clock`] - injectable time source for file names
//!
//! # Example
//!
//! ```
//! use macsnap::inventory::{parse_str, render, InventoryReport};
//!
//! let report = InventoryReport::new(
//!     vec!["Safari".to_string()],
//!     vec!["git".to_string()],
//!     Vec::new(),
//! );
//! let text = render(&report);
//! assert!(text.contains("Homebrew not found or no casks installed."));
//! assert_eq!(parse_str(&text), report);
//! ```

pub mod clock;
pub mod collector;
pub mod parser;
pub mod report;
pub mod writer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collector::{scan_applications, Collector};
pub use parser::{parse_report, parse_str};
pub use report::{InventoryReport, Section};
pub use writer::{render, report_file_name, write_report};
