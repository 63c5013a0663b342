//! Installer artifact persistence and cleanup.
//!
//! The verified payload is written to `<name>.part` and renamed into place,
//! so a crash mid-write never leaves a runnable `<name>` on disk. Only the
//! runner calls `persist`, and only after the digest check passed.

use crate::error::StepError;
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary suffix used before the rename into place.
pub const TEMP_SUFFIX: &str = ".part";

fn io_err(path: &Path, source: std::io::Error) -> StepError {
    StepError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Path for the in-progress file: appends `.part` to the final path.
pub fn part_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `bytes` to `dir/name` via a `.part` file and rename.
pub fn persist(bytes: &[u8], dir: &Path, name: &str) -> Result<PathBuf, StepError> {
    let final_path = dir.join(name);
    let part = part_path(&final_path);

    fs::write(&part, bytes).map_err(|e| io_err(&part, e))?;
    fs::rename(&part, &final_path).map_err(|e| io_err(&final_path, e))?;
    Ok(final_path)
}

/// Delete the persisted installer. The runner treats a failure here as
/// warn-and-continue; it is never escalated.
pub fn remove(path: &Path) -> Result<(), StepError> {
    fs::remove_file(path).map_err(|e| io_err(path, e))
}
