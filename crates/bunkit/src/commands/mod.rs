//! Command implementations

pub mod add;
pub mod clean;
pub mod init;
pub mod install;
pub mod list;
pub mod manifest;
pub mod run;
pub mod scripts;
pub mod uninstall;

use anyhow::Result;
use bunkit_core::{Config, Operation};
use bunkit_logs::{surface_name, FileSurface};
use bunkit_manifest::{locate, Manifest};
use bunkit_runtime::Dispatcher;
use std::path::PathBuf;

use crate::output;

/// Per-invocation context: configuration plus the resolved working directory
pub struct Context {
    pub config: Config,
    pub cwd: PathBuf,
}

impl Context {
    /// Locate and parse the manifest governing this invocation.
    ///
    /// Read fresh every time; there is no cache to go stale.
    pub fn manifest(&self) -> bunkit_core::Result<Manifest> {
        let path = locate(&self.cwd, &self.config.manifest_name)?;
        Manifest::load(&path)
    }

    /// Label for the output surface: the manifest's `name` field when one
    /// resolves, otherwise the working directory's file name.
    pub fn project_label(&self) -> String {
        if let Ok(manifest) = self.manifest() {
            if let Some(name) = manifest.name() {
                return name;
            }
            if let Some(stem) = manifest.dir().file_name() {
                return stem.to_string_lossy().into_owned();
            }
        }
        self.cwd
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    }
}

/// Dispatch a bun operation's command line, with `input` substituted into
/// its template when the operation takes one.
pub async fn dispatch_op(ctx: &Context, op: Operation, input: Option<&str>) -> Result<i32> {
    let dispatcher = Dispatcher::new(ctx.config.clone());
    dispatcher.check_binary()?;

    let cmdline = op
        .command_line(&ctx.config.bun_bin, input)
        .expect("operation has no command template");
    dispatch_line(ctx, &cmdline).await
}

/// Dispatch an already-formatted command line and pass its exit code through
pub async fn dispatch_line(ctx: &Context, cmdline: &str) -> Result<i32> {
    let label = ctx.project_label();
    let name = surface_name(&label, cmdline);
    let mut surface = FileSurface::new(&ctx.config.logs_dir, &name)?;

    output::print_info(&format!("Running {}", cmdline));

    let dispatcher = Dispatcher::new(ctx.config.clone());
    let status = dispatcher.dispatch(cmdline, &ctx.cwd, &mut surface).await?;
    Ok(status.code().unwrap_or(1))
}
