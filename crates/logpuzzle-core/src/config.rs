use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Base URL prefixed to extracted URL fragments when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://code.google.com";

/// Global configuration loaded from `~/.config/logpuzzle/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Scheme and host the extracted URL fragments are fetched from.
    pub base_url: String,
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = no limit).
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: None,
            fetch_timeout_secs: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("logpuzzle")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PuzzleConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PuzzleConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PuzzleConfig = toml::from_str(&data)?;
    Ok(cfg)
}
