//! Run command - execute a manifest script

use anyhow::Result;
use bunkit_core::{Error, ManifestField, Operation};

use super::{dispatch_op, Context};
use crate::prompt;

pub async fn execute(ctx: &Context, script: Option<String>) -> Result<i32> {
    let script = match script {
        Some(s) => s,
        None => {
            let manifest = ctx.manifest()?;
            let entries = manifest.entries(ManifestField::Scripts, &ctx.config.bun_bin)?;
            if entries.is_empty() {
                return Err(Error::NoEntries("scripts".to_string()).into());
            }
            prompt::choose("Script to run", &entries)?
        }
    };

    dispatch_op(ctx, Operation::Run, Some(&script)).await
}
