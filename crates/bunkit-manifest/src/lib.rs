//! Manifest discovery and field projection for bunkit
//!
//! Nothing here is cached: callers locate and re-read the manifest on every
//! invocation, so edits made outside bunkit are always picked up.

mod locate;
mod manifest;

pub use locate::locate;
pub use manifest::{Entry, FieldValue, Manifest};
