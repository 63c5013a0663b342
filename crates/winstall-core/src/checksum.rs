//! SHA-256 computation and checksum descriptor parsing.
//!
//! The descriptor is the usual `sha256sum` layout: the first
//! whitespace-delimited token of the first line is the digest; anything after
//! it (typically the file name) is ignored.

use crate::error::StepError;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Length of a SHA-256 digest in hex characters.
const DIGEST_LEN: usize = 64;

/// Compute SHA-256 of an in-memory buffer as lowercase hex. Pure and
/// deterministic; used on the fully buffered installer payload.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large files.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let digest = hasher.finalize();
    Ok(hex::encode(digest))
}

/// Extract the expected digest from a checksum descriptor.
///
/// The token must be exactly 64 hex characters; it is normalized to
/// lowercase so comparison is case-insensitive.
pub fn parse_digest(descriptor: &str) -> Result<String, StepError> {
    let first_line = descriptor.lines().next().unwrap_or("");
    let token = first_line
        .split_whitespace()
        .next()
        .ok_or_else(|| StepError::Descriptor("empty descriptor".to_string()))?;

    if token.len() != DIGEST_LEN || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(StepError::Descriptor(format!(
            "expected a {}-char hex digest, got {:?}",
            DIGEST_LEN, token
        )));
    }

    Ok(token.to_ascii_lowercase())
}

/// Compare a computed digest against the published one. Hex case is not
/// significant; a mismatch is an integrity failure.
pub fn verify(computed: &str, expected: &str) -> Result<(), StepError> {
    if computed.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(StepError::Integrity {
            expected: expected.to_ascii_lowercase(),
            computed: computed.to_ascii_lowercase(),
        })
    }
}
