//! Command dispatch
//!
//! Each dispatch is one linear sequence: spawn the command line through the
//! configured shell, stream combined output to the surface, wait for exit.
//! The exit status is passed through untouched; a failing subprocess is the
//! subprocess's business, not ours.

use bunkit_core::{Config, Error, Result};
use bunkit_logs::Surface;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Spawns templated command lines and streams their output
pub struct Dispatcher {
    config: Config,
}

impl Dispatcher {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Verify the configured package manager binary is on PATH
    pub fn check_binary(&self) -> Result<PathBuf> {
        which::which(&self.config.bun_bin)
            .map_err(|_| Error::CommandNotFound(self.config.bun_bin.clone()))
    }

    /// Run `cmdline` in `cwd`, streaming stdout and stderr to `surface`.
    ///
    /// The command line is handed to the shell verbatim. Output from both
    /// streams is merged line-by-line in arrival order. No timeout is applied;
    /// a hung child blocks only its own surface.
    pub async fn dispatch(
        &self,
        cmdline: &str,
        cwd: &Path,
        surface: &mut dyn Surface,
    ) -> Result<ExitStatus> {
        info!("Dispatching '{}' in {}", cmdline, cwd.display());
        surface.write_line(&format!("$ {}", cmdline))?;

        let mut child = Command::new(&self.config.shell)
            .arg("-c")
            .arg(cmdline)
            .current_dir(cwd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::process_start(format!("Failed to start '{}': {}", cmdline, e))
            })?;

        let (tx, mut rx) = mpsc::channel::<String>(64);

        if let Some(stdout) = child.stdout.take() {
            tokio::spawn(pump(stdout, tx.clone()));
        }
        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(pump(stderr, tx.clone()));
        }
        drop(tx);

        while let Some(line) = rx.recv().await {
            surface.write_line(&line)?;
        }

        let status = child.wait().await?;
        debug!("'{}' exited with {}", cmdline, status);
        Ok(status)
    }
}

/// Forward lines from a child stream into the merge channel
async fn pump<R>(stream: R, tx: mpsc::Sender<String>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut lines = BufReader::new(stream).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if tx.send(line).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunkit_logs::MemorySurface;
    use tempfile::TempDir;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Config::default())
    }

    #[tokio::test]
    async fn test_dispatch_captures_stdout() {
        let dir = TempDir::new().unwrap();
        let mut surface = MemorySurface::new("test:echo");

        let status = dispatcher()
            .dispatch("echo hello", dir.path(), &mut surface)
            .await
            .unwrap();

        assert!(status.success());
        assert!(surface.contains("hello"));
    }

    #[tokio::test]
    async fn test_dispatch_writes_command_header() {
        let dir = TempDir::new().unwrap();
        let mut surface = MemorySurface::new("test:true");

        dispatcher()
            .dispatch("true", dir.path(), &mut surface)
            .await
            .unwrap();

        assert_eq!(surface.lines()[0], "$ true");
    }

    #[tokio::test]
    async fn test_dispatch_captures_stderr() {
        let dir = TempDir::new().unwrap();
        let mut surface = MemorySurface::new("test:err");

        dispatcher()
            .dispatch("echo oops >&2", dir.path(), &mut surface)
            .await
            .unwrap();

        assert!(surface.contains("oops"));
    }

    #[tokio::test]
    async fn test_exit_status_passed_through() {
        let dir = TempDir::new().unwrap();
        let mut surface = MemorySurface::new("test:exit");

        let status = dispatcher()
            .dispatch("exit 3", dir.path(), &mut surface)
            .await
            .unwrap();

        assert_eq!(status.code(), Some(3));
    }

    #[tokio::test]
    async fn test_runs_in_given_cwd() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();
        let mut surface = MemorySurface::new("test:ls");

        dispatcher()
            .dispatch("ls", dir.path(), &mut surface)
            .await
            .unwrap();

        assert!(surface.contains("marker.txt"));
    }

    #[tokio::test]
    async fn test_missing_shell_is_start_failure() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            shell: "definitely-not-a-shell".to_string(),
            ..Config::default()
        };
        let mut surface = MemorySurface::new("test:none");

        let err = Dispatcher::new(config)
            .dispatch("echo hi", dir.path(), &mut surface)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ProcessStartFailed(_)));
    }

    #[test]
    fn test_check_binary_missing() {
        let config = Config {
            bun_bin: "definitely-not-bun-12345".to_string(),
            ..Config::default()
        };
        let err = Dispatcher::new(config).check_binary().unwrap_err();
        assert!(matches!(err, Error::CommandNotFound(_)));
    }

    #[test]
    fn test_check_binary_present() {
        // sh is always around on the platforms we support
        let config = Config {
            bun_bin: "sh".to_string(),
            ..Config::default()
        };
        assert!(Dispatcher::new(config).check_binary().is_ok());
    }
}
