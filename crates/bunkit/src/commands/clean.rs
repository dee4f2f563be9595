//! Clean command - delete the project's node_modules directory
//!
//! The removal is dispatched as a command like everything else, but the path
//! always comes from the manifest's directory. Anything short of "directory
//! exists and the user said yes" reports "already cleaned" and does nothing,
//! matching the original behavior.

use anyhow::Result;
use bunkit_core::{clean_command, NODE_MODULES_DIR};
use tracing::debug;

use super::{dispatch_line, Context};
use crate::{output, prompt};

pub async fn execute(ctx: &Context, yes: bool) -> Result<i32> {
    let manifest = ctx.manifest()?;
    let node_modules = manifest.dir().join(NODE_MODULES_DIR);

    if !node_modules.is_dir() {
        debug!("{} does not exist", node_modules.display());
        output::print_info("already cleaned");
        return Ok(0);
    }

    let confirmed = yes || prompt::confirm(&format!("Delete {}?", node_modules.display()))?;
    if !confirmed {
        output::print_info("already cleaned");
        return Ok(0);
    }

    dispatch_line(ctx, &clean_command(manifest.dir())).await
}
