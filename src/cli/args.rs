//! CLI argument definitions.
//!
//! The modes are flags in one exclusive group, so `macsnap` with no mode
//! flag indexes.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use clap_complete::Shell;

use crate::config::Overrides;

/// macsnap - index and restore macOS applications and Homebrew packages.
#[derive(Debug, Parser)]
#[command(name = "macsnap")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").args(["index", "restore", "completions"])))]
pub struct Cli {
    /// Scan the system and write the software list (default)
    #[arg(long)]
    pub index: bool,

    /// Parse the given software list and reinstall it
    #[arg(long, value_name = "FILE")]
    pub restore: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Path to config file (overrides ~/.macsnap/config.yml)
    #[arg(short, long, env = "MACSNAP_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Folder the report is written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Homebrew program to run
    #[arg(long, env = "MACSNAP_BREW", value_name = "PROGRAM")]
    pub brew: Option<String>,

    /// Install everything without the selection checklist
    #[arg(long)]
    pub non_interactive: bool,

    /// Show install commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Show Homebrew output while installing
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// What a run does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Index,
    Restore(PathBuf),
    Completions(Shell),
}

impl Cli {
    /// The selected mode. Index when no mode flag is given.
    pub fn mode(&self) -> Mode {
        if let Some(path) = &self.restore {
            Mode::Restore(path.clone())
        } else if let Some(shell) = self.completions {
            Mode::Completions(shell)
        } else {
            Mode::Index
        }
    }

    /// Settings given on the command line or through the environment.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            output_dir: self.output_dir.clone(),
            brew: self.brew.clone(),
        }
    }
}
