//! Manifest command - open the project manifest for editing
//!
//! Not a dispatch: the manifest path is handed to $VISUAL/$EDITOR directly.
//! Without an editor configured, the path is printed for the caller to use.

use anyhow::Result;
use bunkit_manifest::locate;
use tokio::process::Command;
use tracing::info;

use super::Context;

pub async fn execute(ctx: &Context) -> Result<i32> {
    let path = locate(&ctx.cwd, &ctx.config.manifest_name)?;

    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .ok();

    match editor {
        Some(editor) if !editor.is_empty() => {
            info!("Opening {} with {}", path.display(), editor);
            let status = Command::new(&editor).arg(&path).status().await?;
            Ok(status.code().unwrap_or(1))
        }
        _ => {
            println!("{}", path.display());
            Ok(0)
        }
    }
}
