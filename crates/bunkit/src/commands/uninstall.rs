//! Uninstall command - remove a dependency

use anyhow::Result;
use bunkit_core::{Error, ManifestField, Operation};

use super::{dispatch_op, Context};
use crate::prompt;

pub async fn execute(ctx: &Context, package: Option<String>) -> Result<i32> {
    let package = match package {
        Some(p) => p,
        None => {
            let manifest = ctx.manifest()?;
            let entries =
                manifest.entries(ManifestField::Dependencies, &ctx.config.bun_bin)?;
            if entries.is_empty() {
                return Err(Error::NoEntries("dependencies".to_string()).into());
            }
            prompt::choose("Dependency to remove", &entries)?
        }
    };

    dispatch_op(ctx, Operation::Uninstall, Some(&package)).await
}
