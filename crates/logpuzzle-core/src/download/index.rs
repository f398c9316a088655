//! HTML viewer page naming the downloaded images in order.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Filename of the generated viewer page.
pub const INDEX_FILENAME: &str = "index.html";

/// Renders the viewer page: body font-size forced to zero so alt text does
/// not shift the tiled images, then one `<img>` per file in order.
pub fn render_index(image_names: &[String]) -> String {
    let mut html = String::from("<html>\n<style>body { font-size: 0; }</style>\n");
    for name in image_names {
        html.push_str(&format!("<img src=\"{name}\">\n"));
    }
    html.push_str("</html>\n");
    html
}

/// Writes (creates or truncates) the viewer page in `dest_dir`.
pub fn write_index(dest_dir: &Path, image_names: &[String]) -> Result<()> {
    let path = dest_dir.join(INDEX_FILENAME);
    fs::write(&path, render_index(image_names))
        .with_context(|| format!("write index page: {}", path.display()))?;
    Ok(())
}
