//! Typed pipeline errors.
//!
//! Each step returns a `StepError` variant so the runner (and tests) can tell
//! a transport failure from an integrity failure without string matching.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error from one step of the install pipeline.
#[derive(Debug, Error)]
pub enum StepError {
    /// Transport-level HTTP failure (DNS, TLS, connect timeout, reset).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },

    /// Checksum descriptor did not contain a usable digest token.
    #[error("malformed checksum descriptor: {0}")]
    Descriptor(String),

    /// Computed digest does not match the published one.
    #[error("integrity check failed: expected {expected}, computed {computed}")]
    Integrity { expected: String, computed: String },

    /// Filesystem failure while persisting or deleting the installer.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Installer binary could not be spawned.
    #[error("failed to launch {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Installer ran but exited with a non-zero status.
    #[error("installer exited with code {code}")]
    Exit { code: i32 },
}

impl StepError {
    /// True for failures of the install step itself (spawn or exit status).
    /// These are the only errors the cleanup policy distinguishes.
    pub fn is_install_failure(&self) -> bool {
        matches!(self, StepError::Spawn { .. } | StepError::Exit { .. })
    }
}
