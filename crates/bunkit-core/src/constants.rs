//! Constants and default values for bunkit

use std::path::PathBuf;

/// Project manifest file name searched for in the directory chain
pub const MANIFEST_FILE: &str = "package.json";

/// Directory removed by the clean operation
pub const NODE_MODULES_DIR: &str = "node_modules";

/// Default package manager binary
pub const DEFAULT_BUN_BIN: &str = "bun";

/// Shell used to execute dispatched command lines
pub const DEFAULT_SHELL: &str = "sh";

/// Default bunkit home directory name
pub const BUNKIT_DIR: &str = ".bunkit";

/// Default log directory name
pub const LOGS_DIR: &str = "logs";

/// Default config file names to search for (in priority order)
pub const CONFIG_FILES: &[&str] = &[
    "bunkit.config.toml",
    "bunkit.toml",
    "bunkit.config.json",
    "bunkit.json",
];

/// Get the bunkit home directory
pub fn bunkit_home() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(BUNKIT_DIR))
        .unwrap_or_else(|| PathBuf::from(BUNKIT_DIR))
}

/// Get the logs directory
pub fn logs_dir() -> PathBuf {
    bunkit_home().join(LOGS_DIR)
}
