//! Interactive prompts
//!
//! Prompts are only offered on a real terminal; in pipelines the caller is
//! told to pass the value as an argument instead. A dismissed prompt maps to
//! `Error::Cancelled` and aborts the operation before anything is spawned.

use bunkit_core::{Error, Result};
use bunkit_manifest::Entry;
use dialoguer::{theme::ColorfulTheme, Confirm, FuzzySelect, Input};

fn ensure_tty() -> Result<()> {
    if atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout) {
        Ok(())
    } else {
        Err(Error::NotInteractive)
    }
}

/// Free-text prompt
pub fn free_text(label: &str) -> Result<String> {
    ensure_tty()?;
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact_text()
        .map_err(|_| Error::Cancelled)
}

/// Single choice from manifest entries; returns the chosen key
pub fn choose(label: &str, entries: &[Entry]) -> Result<String> {
    ensure_tty()?;
    let items: Vec<&str> = entries.iter().map(|e| e.display.as_str()).collect();
    let index = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .items(&items)
        .default(0)
        .interact()
        .map_err(|_| Error::Cancelled)?;
    Ok(entries[index].key.clone())
}

/// Yes/no confirmation, defaulting to no
pub fn confirm(label: &str) -> Result<bool> {
    ensure_tty()?;
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .default(false)
        .interact()
        .map_err(|_| Error::Cancelled)
}
