//! The install pipeline.
//!
//! Strict sequence: fetch checksum descriptor, fetch installer, verify,
//! persist, execute, clean up. Any failure before the install step aborts
//! the run; an install failure interacts with the cleanup policy; a cleanup
//! failure is logged and swallowed.

use crate::artifact;
use crate::checksum;
use crate::config::{CleanupPolicy, Endpoints, WinstallConfig};
use crate::error::StepError;
use crate::fetch::Fetcher;
use crate::install::Launcher;
use std::path::PathBuf;

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// Where the installer was persisted during the run.
    pub installer_path: PathBuf,
    /// Verified SHA-256 of the payload, lowercase hex.
    pub digest: String,
    /// True if cleanup deleted the file.
    pub removed: bool,
}

/// Executes the pipeline once. Generic over the network and process seams so
/// tests can substitute canned responses and a recording launcher.
pub struct Runner<F, L> {
    config: WinstallConfig,
    endpoints: Endpoints,
    fetcher: F,
    launcher: L,
}

impl<F: Fetcher, L: Launcher> Runner<F, L> {
    pub fn new(config: WinstallConfig, endpoints: Endpoints, fetcher: F, launcher: L) -> Self {
        Runner {
            config,
            endpoints,
            fetcher,
            launcher,
        }
    }

    /// Run the whole pipeline.
    pub fn run(&self) -> Result<RunReport, StepError> {
        let checksum_url = self.endpoints.checksum_url.as_str();
        tracing::info!("fetching checksum descriptor from {}", checksum_url);
        let descriptor = self.fetcher.fetch_text(checksum_url)?;
        let expected = checksum::parse_digest(&descriptor)?;

        let installer_url = self.endpoints.installer_url.as_str();
        tracing::info!("fetching installer from {}", installer_url);
        let payload = self.fetcher.fetch_bytes(installer_url)?;
        tracing::debug!("installer payload: {} bytes", payload.len());

        // Integrity gate: nothing is written or executed past a mismatch.
        let computed = checksum::sha256_hex(&payload);
        checksum::verify(&computed, &expected)?;

        let dir = self.config.install_dir.resolve().map_err(|e| StepError::Io {
            path: PathBuf::from("."),
            source: e,
        })?;
        let path = artifact::persist(&payload, &dir, &self.config.installer_name)?;
        tracing::info!("persisted verified installer to {}", path.display());

        let install_result = self.launcher.launch(&path, &self.config.silent_args);
        if let Err(ref e) = install_result {
            tracing::warn!("install step failed: {}", e);
        }

        let removed = match self.config.cleanup {
            CleanupPolicy::Never => false,
            CleanupPolicy::OnSuccess if install_result.is_err() => false,
            _ => match artifact::remove(&path) {
                Ok(()) => {
                    tracing::info!("deleted {}", path.display());
                    true
                }
                Err(e) => {
                    tracing::warn!("could not delete {}: {}", path.display(), e);
                    false
                }
            },
        };

        install_result?;

        Ok(RunReport {
            installer_path: path,
            digest: computed,
            removed,
        })
    }
}
