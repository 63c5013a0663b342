//! Silent installer execution.

use crate::error::StepError;
use std::path::Path;
use std::process::Command;

/// Seam for spawning the installer so tests can record invocations instead
/// of executing a real binary.
pub trait Launcher {
    /// Run `path` with `args`, blocking until it exits.
    /// A non-zero exit status is an error.
    fn launch(&self, path: &Path, args: &[String]) -> Result<(), StepError>;
}

/// Spawns the installer as a child process and waits for completion.
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, path: &Path, args: &[String]) -> Result<(), StepError> {
        tracing::info!("running {} {}", path.display(), args.join(" "));
        let status = Command::new(path)
            .args(args)
            .status()
            .map_err(|e| StepError::Spawn {
                path: path.to_path_buf(),
                source: e,
            })?;

        if !status.success() {
            // Termination by signal has no exit code; report -1.
            return Err(StepError::Exit {
                code: status.code().unwrap_or(-1),
            });
        }
        Ok(())
    }
}
