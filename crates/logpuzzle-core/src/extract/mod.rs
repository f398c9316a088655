//! Puzzle URL extraction from Apache access logs.
//!
//! Scans a log file line by line for request paths of the shape
//! `.../puzzle-<tag>-<sortkey>.jpg`, deduplicates them, and orders them by
//! the encoded sort key so the downloaded pieces tile back into an image.

mod order;
mod token;

pub use order::{dedup_and_sort, sort_key};
pub use token::puzzle_token;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads `log_path` and returns the unique puzzle URLs it references,
/// ascending by [`sort_key`].
///
/// The file is read a line at a time, so memory is bounded by the match set
/// rather than the log size. Each line contributes at most one match (see
/// [`puzzle_token`]). A log without matches yields an empty list.
pub fn extract_urls(log_path: &Path) -> Result<Vec<String>> {
    let file = File::open(log_path)
        .with_context(|| format!("open log file: {}", log_path.display()))?;
    let reader = BufReader::new(file);

    let mut found = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("read log file: {}", log_path.display()))?;
        if let Some(url) = token::puzzle_token(&line) {
            found.push(url.to_string());
        }
    }

    let urls = order::dedup_and_sort(found);
    tracing::debug!(
        count = urls.len(),
        "extracted puzzle urls from {}",
        log_path.display()
    );
    Ok(urls)
}
