//! Add command - install and save a package (optionally as a dev dependency)

use anyhow::Result;
use bunkit_core::{Operation, PromptKind};

use super::{dispatch_op, Context};
use crate::prompt;

pub async fn execute(ctx: &Context, package: Option<String>, dev: bool) -> Result<i32> {
    let op = if dev {
        Operation::InstallSaveDev
    } else {
        Operation::InstallSave
    };

    let package = match package {
        Some(p) => p,
        None => {
            let label = match op.prompt() {
                PromptKind::FreeText { label } => label,
                _ => "Package to install",
            };
            prompt::free_text(label)?
        }
    };

    dispatch_op(ctx, op, Some(&package)).await
}
