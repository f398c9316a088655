//! Sequential image download pipeline.
//!
//! Consumes the ordered URL list from the extractor: ensures the destination
//! directory exists, fetches each image over HTTP in list order, stores it
//! as `img<index>.jpg`, and finishes with a generated `index.html`. One
//! failed fetch aborts the run; images stored before the failure stay on
//! disk and no index page is written.

pub mod index;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use url::Url;

use crate::config::PuzzleConfig;
use crate::fetch::{self, FetchOptions};

/// Local filename for the image at `index` in the ordered list: `img0.jpg`,
/// `img1.jpg`, ... No zero-padding, so an alphabetical directory listing of
/// ten or more images interleaves (`img0, img1, img10, img2, ...`); the
/// index page, not the directory listing, defines the viewing order.
pub fn image_filename(index: usize) -> String {
    format!("img{index}.jpg")
}

/// Absolute remote URL for an extracted fragment: `base` joined with
/// `fragment`. Fragments start with `/`, so against the default base this
/// equals plain string prefixing.
pub fn remote_url(base: &str, fragment: &str) -> Result<String> {
    let base = Url::parse(base).with_context(|| format!("invalid base URL: {base}"))?;
    let joined = base
        .join(fragment)
        .with_context(|| format!("join {fragment} onto base URL"))?;
    Ok(joined.into())
}

/// Downloads `urls` (already ordered) into `dest_dir` and writes the index
/// page.
///
/// Creates `dest_dir` if missing (single level; a missing parent is an
/// error) and prints a one-line notice to stdout when it does. Fetches are
/// sequential and in list order: `img<i>.jpg` always holds the bytes of
/// `urls[i]`. The index page is written only after every fetch succeeded.
pub fn download_images(urls: &[String], dest_dir: &Path, cfg: &PuzzleConfig) -> Result<()> {
    ensure_dest_dir(dest_dir)?;

    let opts = FetchOptions::from_config(cfg);
    let mut image_names = Vec::with_capacity(urls.len());
    for (i, fragment) in urls.iter().enumerate() {
        let remote = remote_url(&cfg.base_url, fragment)?;
        let bytes =
            fetch::fetch_bytes(&remote, &opts).with_context(|| format!("fetch {remote}"))?;
        let name = image_filename(i);
        let local = dest_dir.join(&name);
        fs::write(&local, &bytes)
            .with_context(|| format!("write image file: {}", local.display()))?;
        tracing::info!("stored {} ({} bytes) from {}", local.display(), bytes.len(), remote);
        image_names.push(name);
    }

    index::write_index(dest_dir, &image_names)?;
    tracing::info!(
        "downloaded {} image(s) into {}",
        image_names.len(),
        dest_dir.display()
    );
    Ok(())
}

/// Creates `dest_dir` when missing (single level — a missing parent is an
/// error) and prints a notice to stdout; an existing directory is reused
/// as-is.
fn ensure_dest_dir(dest_dir: &Path) -> Result<()> {
    if dest_dir.exists() {
        return Ok(());
    }
    println!("{} doesn't exist, creating it", dest_dir.display());
    fs::create_dir(dest_dir)
        .with_context(|| format!("create destination directory: {}", dest_dir.display()))?;
    Ok(())
}
