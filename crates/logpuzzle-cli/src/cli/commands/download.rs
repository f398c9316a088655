//! Download mode: fetch the images and write the viewer page.

use anyhow::Result;
use logpuzzle_core::config::PuzzleConfig;
use logpuzzle_core::download;
use std::path::Path;

/// Runs the download pipeline for the extracted URLs.
pub fn run_download(urls: &[String], dest_dir: &Path, cfg: &PuzzleConfig) -> Result<()> {
    download::download_images(urls, dest_dir, cfg)
}
