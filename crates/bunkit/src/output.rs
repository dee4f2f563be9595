//! Terminal output formatting

use colored::Colorize;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tabled::{settings::Style, Table, Tabled};

/// Global flag for JSON output mode
static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable JSON output mode
pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::SeqCst);
}

/// Check if JSON output mode is enabled
pub fn is_json_mode() -> bool {
    JSON_MODE.load(Ordering::SeqCst)
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// One row of the scripts listing
#[derive(Tabled, Serialize)]
pub struct ScriptRow {
    #[tabled(rename = "script")]
    pub name: String,
    #[tabled(rename = "invocation")]
    pub invocation: String,
    #[tabled(rename = "definition")]
    pub definition: String,
}

pub fn print_scripts_table(rows: &[ScriptRow]) {
    if is_json_mode() {
        match serde_json::to_string_pretty(&rows) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
        return;
    }

    if rows.is_empty() {
        println!("No scripts defined");
        return;
    }

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_toggle() {
        set_json_mode(false);
        assert!(!is_json_mode());

        set_json_mode(true);
        assert!(is_json_mode());

        set_json_mode(false);
        assert!(!is_json_mode());
    }

    #[test]
    fn test_script_row_serializes() {
        let row = ScriptRow {
            name: "build".to_string(),
            invocation: "bun build".to_string(),
            definition: "tsc".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"invocation\":\"bun build\""));
    }
}
