//! Blocking HTTP GET for individual puzzle images.
//!
//! One curl Easy handle per fetch, redirects followed, the whole body
//! collected in memory. Timeouts are applied only when configured;
//! otherwise libcurl's own defaults stand.

use std::time::Duration;
use thiserror::Error;

use crate::config::PuzzleConfig;

/// Error from a single image fetch: transport failure or non-2xx status.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (connect failure, timeout, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
}

/// Timeouts for a fetch; `None` leaves libcurl's default in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

impl FetchOptions {
    /// Builds fetch options from the loaded config.
    pub fn from_config(cfg: &PuzzleConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            timeout: cfg.fetch_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Fetches `url` with a blocking GET and returns the response body.
///
/// Follows up to 10 redirects (the puzzle host answers 302 for image
/// paths). A non-2xx final status is an error, as is any transport failure.
pub fn fetch_bytes(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t)?;
    }
    if let Some(t) = opts.timeout {
        easy.timeout(t)?;
    }

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }
    Ok(body)
}
