//! File-backed surface

use bunkit_core::Result;
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{slug, Surface};

/// Surface that appends timestamped lines to a log file.
///
/// Lines are also echoed to stdout by default so the invoking terminal
/// doubles as the live view.
pub struct FileSurface {
    name: String,
    path: PathBuf,
    writer: BufWriter<File>,
    echo: bool,
}

impl FileSurface {
    /// Open (or create) the log file for `name` under `logs_dir`
    pub fn new(logs_dir: &Path, name: &str) -> Result<Self> {
        fs::create_dir_all(logs_dir)?;

        let path = logs_dir.join(format!("{}.log", slug(name)));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        debug!("Opened surface log at {}", path.display());

        Ok(Self {
            name: name.to_string(),
            path,
            writer: BufWriter::new(file),
            echo: true,
        })
    }

    /// Enable or disable echoing lines to stdout
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// The log file backing this surface
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Surface for FileSurface {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(self.writer, "[{}] {}", timestamp, line)?;
        self.writer.flush()?;

        if self.echo {
            println!("{}", line);
        }
        Ok(())
    }
}
