//! Upward manifest search

use bunkit_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find the nearest manifest at or above `start`.
///
/// Checks `start` itself first, then each ancestor in order, and returns the
/// full path of the first `manifest_name` file found. Reaching the filesystem
/// root without a match is a hard failure; callers surface it unchanged.
pub fn locate(start: &Path, manifest_name: &str) -> Result<PathBuf> {
    let mut dir = start;
    loop {
        let candidate = dir.join(manifest_name);
        if candidate.is_file() {
            debug!("Found manifest at {}", candidate.display());
            return Ok(candidate);
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return Err(Error::ManifestNotFound(start.to_path_buf())),
        }
    }
}
