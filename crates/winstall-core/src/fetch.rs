//! Blocking HTTP fetch for the checksum descriptor and installer payload.
//!
//! Uses the curl crate. The full response body is buffered in memory before
//! any verification happens; there is no streaming check.

use crate::error::StepError;
use std::time::Duration;

/// Network seam for the pipeline. Production code uses [`CurlFetcher`];
/// tests substitute a fetcher serving canned responses.
pub trait Fetcher {
    /// Fetch a small text resource (the checksum descriptor).
    fn fetch_text(&self, url: &str) -> Result<String, StepError>;

    /// Fetch a binary resource (the installer payload), fully buffered.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, StepError>;
}

/// libcurl-backed fetcher. Follows redirects; fails on non-2xx status.
pub struct CurlFetcher;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

fn transport(url: &str, e: curl::Error) -> StepError {
    StepError::Transport {
        url: url.to_string(),
        source: e,
    }
}

/// Performs a GET and returns the full body. No overall transfer timeout is
/// set: installer payloads are large and download time is unbounded.
fn get(url: &str) -> Result<Vec<u8>, StepError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(|e| transport(url, e))?;
    easy.follow_location(true).map_err(|e| transport(url, e))?;
    easy.max_redirections(10).map_err(|e| transport(url, e))?;
    easy.connect_timeout(CONNECT_TIMEOUT)
        .map_err(|e| transport(url, e))?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(|e| transport(url, e))?;
        transfer.perform().map_err(|e| transport(url, e))?;
    }

    let code = easy.response_code().map_err(|e| transport(url, e))?;
    if code < 200 || code >= 300 {
        return Err(StepError::Http {
            url: url.to_string(),
            code,
        });
    }

    Ok(body)
}

impl Fetcher for CurlFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, StepError> {
        let body = get(url)?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, StepError> {
        get(url)
    }
}
