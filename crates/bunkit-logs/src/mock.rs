//! Mock surface for testing

use bunkit_core::Result;
use std::sync::{Arc, Mutex};

use crate::Surface;

/// A surface that records every line in memory
pub struct MemorySurface {
    name: String,
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySurface {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle for inspecting recorded lines after the surface moved elsewhere
    pub fn lines_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.lines)
    }

    /// Snapshot of all recorded lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("surface lock poisoned").clone()
    }

    /// Check whether any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}

impl Surface for MemorySurface {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines
            .lock()
            .expect("surface lock poisoned")
            .push(line.to_string());
        Ok(())
    }
}
