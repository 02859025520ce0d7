//! Configuration.
//!
//! Settings come from three places, highest priority first:
//!
//! 1. Command-line flags and `MACSNAP_*` environment variables
//! 2. The settings file (`--config`, or `~/.macsnap/config.yml`)
//! 3. Built-in defaults
//!
//! ```yaml
//! application_dirs: [/Applications, ~/Applications]
//! brew: brew
//! output_dir: ~/Backups
//! ```

pub mod settings;

pub use settings::{
    default_application_dirs, expand_home, Overrides, Settings, SettingsFile, DEFAULT_BREW,
};
