//! Error types for bunkit

use std::path::PathBuf;

/// bunkit error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No manifest found in {0} or any parent directory")]
    ManifestNotFound(PathBuf),

    #[error("Field '{0}' not found in manifest")]
    FieldMissing(String),

    #[error("Field '{field}' has the wrong shape: expected {expected}")]
    FieldShape {
        field: String,
        expected: &'static str,
    },

    #[error("No {0} defined in manifest")]
    NoEntries(String),

    #[error("Cancelled")]
    Cancelled,

    #[error("Prompt requires a terminal; pass the value as an argument instead")]
    NotInteractive,

    #[error("Process failed to start: {0}")]
    ProcessStartFailed(String),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Manifest parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for bunkit
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }

    pub fn process_start<S: Into<String>>(msg: S) -> Self {
        Error::ProcessStartFailed(msg.into())
    }

    /// True for errors that should be reported without the error prefix
    /// (the user chose to back out, nothing actually failed).
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}
