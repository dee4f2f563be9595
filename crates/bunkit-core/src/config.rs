//! Configuration for bunkit
//!
//! Supports two configuration file formats:
//! - TOML (.toml)
//! - JSON (.json)
//!
//! Every knob has a documented default, so a config file is never required.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Detect format from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// bunkit configuration
///
/// Replaces what would otherwise be process-wide mutable settings: the
/// package manager binary, the manifest file name, and where surface logs go.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package manager binary name (default: "bun")
    pub bun_bin: String,
    /// Manifest file name searched for in the directory chain
    /// (default: "package.json")
    pub manifest_name: String,
    /// Directory receiving surface log files (default: ~/.bunkit/logs)
    pub logs_dir: PathBuf,
    /// Shell used to execute dispatched command lines (default: "sh")
    pub shell: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bun_bin: DEFAULT_BUN_BIN.to_string(),
            manifest_name: MANIFEST_FILE.to_string(),
            logs_dir: logs_dir(),
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        match ConfigFormat::from_path(path) {
            Some(ConfigFormat::Toml) => Ok(toml::from_str(&content)?),
            Some(ConfigFormat::Json) => Ok(serde_json::from_str(&content)?),
            None => Err(Error::config(format!(
                "Unknown config format: {}",
                path.display()
            ))),
        }
    }

    /// Find and load configuration, falling back to defaults.
    ///
    /// Checks `CONFIG_FILES` in `dir` first, then in the bunkit home
    /// directory. The first existing file wins.
    pub fn discover(dir: &Path) -> Result<Self> {
        for base in [dir.to_path_buf(), bunkit_home()] {
            for name in CONFIG_FILES {
                let candidate = base.join(name);
                if candidate.is_file() {
                    return Self::load(&candidate);
                }
            }
        }
        Ok(Self::default())
    }
}
