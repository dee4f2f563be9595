//! The operation table
//!
//! Every user-triggerable action, its input requirements, and its command
//! template live here. Command lines are built by plain string substitution:
//! user input is interpolated verbatim, shell metacharacters included. That
//! matches what the dispatched shell ultimately sees and is a known injection
//! vector for free-text operations.

use std::fmt;
use std::path::Path;

use crate::constants::NODE_MODULES_DIR;

/// Manifest field an operation draws its choices from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestField {
    Scripts,
    Dependencies,
}

impl ManifestField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestField::Scripts => "scripts",
            ManifestField::Dependencies => "dependencies",
        }
    }
}

impl fmt::Display for ManifestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the operation needs from the user before its command line can be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// No input needed
    None,
    /// Arbitrary text typed by the user
    FreeText { label: &'static str },
    /// One key chosen from a manifest field's entries
    Choice(ManifestField),
    /// Yes/no confirmation
    Confirm,
}

/// One named, user-triggerable operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Init,
    Install,
    InstallSave,
    InstallSaveDev,
    Uninstall,
    List,
    Test,
    Run,
    Clean,
    VisitManifest,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Init,
        Operation::Install,
        Operation::InstallSave,
        Operation::InstallSaveDev,
        Operation::Uninstall,
        Operation::List,
        Operation::Test,
        Operation::Run,
        Operation::Clean,
        Operation::VisitManifest,
    ];

    /// Stable operation name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::Install => "install",
            Operation::InstallSave => "install-save",
            Operation::InstallSaveDev => "install-save-dev",
            Operation::Uninstall => "uninstall",
            Operation::List => "list",
            Operation::Test => "test",
            Operation::Run => "run",
            Operation::Clean => "clean",
            Operation::VisitManifest => "visit-manifest",
        }
    }

    /// Single-character mnemonic, kept from the original key bindings
    pub fn mnemonic(&self) -> char {
        match self {
            Operation::Init => 'n',
            Operation::Install => 'i',
            Operation::InstallSave => 's',
            Operation::InstallSaveDev => 'd',
            Operation::Uninstall => 'u',
            Operation::List => 'l',
            Operation::Test => 't',
            Operation::Run => 'r',
            Operation::Clean => 'c',
            Operation::VisitManifest => 'v',
        }
    }

    /// Input the operation needs before dispatch
    pub fn prompt(&self) -> PromptKind {
        match self {
            Operation::Init => PromptKind::None,
            Operation::Install => PromptKind::None,
            Operation::InstallSave => PromptKind::FreeText {
                label: "Package to install",
            },
            Operation::InstallSaveDev => PromptKind::FreeText {
                label: "Dev package to install",
            },
            Operation::Uninstall => PromptKind::Choice(ManifestField::Dependencies),
            Operation::List => PromptKind::None,
            Operation::Test => PromptKind::None,
            Operation::Run => PromptKind::Choice(ManifestField::Scripts),
            Operation::Clean => PromptKind::Confirm,
            Operation::VisitManifest => PromptKind::None,
        }
    }

    /// Whether the operation must resolve a manifest before running.
    ///
    /// Operations whose subprocess reads the manifest itself (install, test)
    /// don't need one resolved up front; bun reports its own failure.
    pub fn needs_manifest(&self) -> bool {
        matches!(
            self,
            Operation::Uninstall
                | Operation::Run
                | Operation::Clean
                | Operation::VisitManifest
        )
    }

    /// Build the command line for this operation.
    ///
    /// `input` is the resolved prompt value where the template takes one;
    /// it is substituted without any escaping. Returns `None` for operations
    /// without a bun template (clean, visit-manifest).
    pub fn command_line(&self, bun: &str, input: Option<&str>) -> Option<String> {
        let arg = input.unwrap_or_default();
        match self {
            Operation::Init => Some(format!("{} init", bun)),
            Operation::Install => Some(format!("{} install", bun)),
            Operation::InstallSave => Some(format!("{} install {}", bun, arg)),
            Operation::InstallSaveDev => Some(format!("{} install -D {}", bun, arg)),
            Operation::Uninstall => Some(format!("{} remove {}", bun, arg)),
            Operation::List => Some(format!("{} pm ls", bun)),
            Operation::Test => Some(format!("{} test", bun)),
            Operation::Run => Some(format!("{} run {}", bun, arg)),
            Operation::Clean | Operation::VisitManifest => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Command line removing a project's node_modules directory.
///
/// The path comes from the manifest's directory, never from user input.
pub fn clean_command(manifest_dir: &Path) -> String {
    format!(
        "rm -rf {}",
        manifest_dir.join(NODE_MODULES_DIR).display()
    )
}
