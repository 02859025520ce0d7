//! Settings file loading and resolution.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MacsnapError, Result};

/// Program used when nothing else names one.
pub const DEFAULT_BREW: &str = "brew";

/// Contents of `config.yml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// Folders scanned for `.app` bundles.
    pub application_dirs: Option<Vec<String>>,

    /// Homebrew program name or path.
    pub brew: Option<String>,

    /// Folder new reports are written to.
    pub output_dir: Option<String>,
}

impl SettingsFile {
    /// Parse a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| MacsnapError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse settings from YAML text. An empty document is all defaults.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Path of the per-user settings file, if it exists.
    pub fn discover() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(".macsnap").join("config.yml");
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit settings file. It must exist.
    pub config: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub brew: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub application_dirs: Vec<PathBuf>,
    pub brew: String,
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self::merge(SettingsFile::default(), &Overrides::default())
    }
}

impl Settings {
    /// Load the settings file and apply overrides.
    ///
    /// An explicit `--config` must exist. Without one, `~/.macsnap/config.yml`
    /// is read when present.
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        let path = match &overrides.config {
            Some(path) if !path.is_file() => {
                return Err(MacsnapError::ConfigNotFound { path: path.clone() });
            }
            Some(path) => Some(path.clone()),
            None => SettingsFile::discover(),
        };

        let file = match &path {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                SettingsFile::load(path)?
            }
            None => SettingsFile::default(),
        };

        Ok(Self::merge(file, overrides))
    }

    /// Combine a parsed file with overrides. Overrides win.
    pub fn merge(file: SettingsFile, overrides: &Overrides) -> Self {
        let application_dirs = match file.application_dirs {
            Some(listed) => listed.iter().map(|d| expand_home(d)).collect(),
            None => default_application_dirs(),
        };

        let brew = overrides
            .brew
            .clone()
            .or(file.brew)
            .unwrap_or_else(|| DEFAULT_BREW.to_string());

        let output_dir = overrides
            .output_dir
            .clone()
            .or_else(|| file.output_dir.as_deref().map(expand_home))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            application_dirs,
            brew,
            output_dir,
        }
    }
}

/// `/Applications` and `~/Applications`.
pub fn default_application_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("/Applications"), expand_home("~/Applications")]
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}
