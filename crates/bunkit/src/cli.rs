//! CLI argument definitions
//!
//! Each subcommand keeps its original single-character key binding as a
//! visible alias, so `bunkit r` still means "run a script".

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bunkit")]
#[command(version, about = "Interactive companion for the bun package manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory to operate from (default: current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Output in JSON format where applicable
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a project manifest (bun init)
    #[command(visible_alias = "n")]
    Init,

    /// Install all dependencies (bun install)
    #[command(visible_alias = "i")]
    Install,

    /// Install and save a package (bun install <pkg>)
    #[command(visible_alias = "s")]
    Add {
        /// Package name (prompted for when omitted)
        package: Option<String>,
    },

    /// Install and save a dev package (bun install -D <pkg>)
    #[command(name = "add-dev", visible_alias = "d")]
    AddDev {
        /// Package name (prompted for when omitted)
        package: Option<String>,
    },

    /// Remove a dependency (bun remove <pkg>)
    #[command(visible_alias = "u")]
    Remove {
        /// Dependency name (picked from the manifest when omitted)
        package: Option<String>,
    },

    /// List installed packages (bun pm ls)
    #[command(visible_alias = "l")]
    List,

    /// Run a manifest script (bun run <script>)
    #[command(visible_alias = "r")]
    Run {
        /// Script name (picked from the manifest when omitted)
        script: Option<String>,
    },

    /// Run the project's tests (bun test)
    #[command(visible_alias = "t")]
    Test,

    /// Delete the project's node_modules directory
    #[command(visible_alias = "c")]
    Clean {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Open the project manifest in your editor
    #[command(visible_alias = "v")]
    Manifest,

    /// Show the manifest's script entries without running anything
    Scripts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mnemonic_aliases() {
        let cli = Cli::try_parse_from(["bunkit", "r", "build"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Run { script: Some(s) } if s == "build"
        ));

        let cli = Cli::try_parse_from(["bunkit", "s", "lodash"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Add { package: Some(p) } if p == "lodash"
        ));

        let cli = Cli::try_parse_from(["bunkit", "d", "vitest"]).unwrap();
        assert!(matches!(cli.command, Commands::AddDev { .. }));

        let cli = Cli::try_parse_from(["bunkit", "n"]).unwrap();
        assert!(matches!(cli.command, Commands::Init));

        let cli = Cli::try_parse_from(["bunkit", "v"]).unwrap();
        assert!(matches!(cli.command, Commands::Manifest));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["bunkit", "-vv", "list", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
    }

    #[test]
    fn test_clean_yes_flag() {
        let cli = Cli::try_parse_from(["bunkit", "clean", "--yes"]).unwrap();
        assert!(matches!(cli.command, Commands::Clean { yes: true }));
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["bunkit", "frobnicate"]).is_err());
    }
}
