//! Named output surfaces
//!
//! A surface is the destination for one dispatched command's streamed output.
//! The dispatcher only ever needs the one capability the trait exposes:
//! writing a line to a named destination.

mod mock;
mod writer;

pub use mock::MemorySurface;
pub use writer::FileSurface;

use bunkit_core::Result;

/// A named destination for streamed subprocess output
pub trait Surface: Send {
    /// The surface's unique label
    fn name(&self) -> &str;

    /// Append one line of output
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Build a surface label from the project name and the command text.
///
/// Distinct commands get distinct surfaces, so two rapid invocations never
/// share a destination.
pub fn surface_name(project: &str, command: &str) -> String {
    format!("{}:{}", project, command)
}

/// Reduce a surface label to a filesystem-safe file stem
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '_' {
            out.push(c);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    out.trim_matches('-').to_string()
}
