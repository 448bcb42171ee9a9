use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory (relative to the working directory) that receives saved images.
pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";

/// Transport timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Largest declared `Content-Length` accepted by the size guard (10 MiB).
pub const DEFAULT_MAX_CONTENT_LENGTH: u64 = 10 * 1024 * 1024;

/// Global configuration loaded from `~/.config/imgfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgfetchConfig {
    /// Where fetched images are written. Relative paths resolve against the working directory.
    pub output_dir: PathBuf,
    /// Timeout for connecting and for a stalled transfer, in seconds.
    pub timeout_secs: u64,
    /// Size guard limit in bytes, compared against the declared `Content-Length`.
    pub max_content_length: u64,
    /// Number of URLs fetched at once. 1 keeps strict input-order processing.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
    /// Optional `User-Agent` sent with every request (None = libcurl default).
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_jobs() -> usize {
    1
}

impl Default for ImgfetchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            jobs: default_jobs(),
            user_agent: None,
        }
    }
}

impl ImgfetchConfig {
    /// Resolve into the runtime settings handed to the fetch pipeline.
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            output_dir: self.output_dir.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            max_content_length: self.max_content_length,
        }
    }
}

/// Per-batch settings the pipeline runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    pub output_dir: PathBuf,
    pub timeout: Duration,
    pub max_content_length: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        ImgfetchConfig::default().fetch_settings()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG location, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgfetchConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] but for an explicit path (e.g. `--config`).
pub fn load_or_init_at(path: &Path) -> Result<ImgfetchConfig> {
    if !path.exists() {
        let default_cfg = ImgfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ImgfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
