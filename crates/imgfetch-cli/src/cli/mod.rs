//! CLI for the imgfetch image downloader.

mod fetch;
mod input;
mod report;

use anyhow::Result;
use clap::Parser;
use imgfetch_core::config::{self, ImgfetchConfig};
use std::path::PathBuf;

/// Fetch images from HTTP(S) URLs into a local directory, skipping non-images,
/// oversized files, and duplicate content.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "imgfetch: guarded, deduplicating image downloader", long_about = None)]
pub struct Cli {
    /// Image URLs. Each argument may hold several comma-separated URLs.
    /// When omitted, one line of comma-separated URLs is read from stdin.
    pub urls: Vec<String>,

    /// Directory that receives the images (default from config: Fetched_Images).
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Connect / stall timeout per request, in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Reject responses whose declared Content-Length exceeds this many bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<u64>,

    /// Fetch up to N URLs at once (default 1 = strictly in order).
    #[arg(long, short = 'j', value_name = "N")]
    pub jobs: Option<usize>,

    /// Use this config file instead of ~/.config/imgfetch/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags take precedence over the config file.
    pub fn apply_overrides(&self, cfg: &mut ImgfetchConfig) {
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        if let Some(t) = self.timeout {
            cfg.timeout_secs = t;
        }
        if let Some(max) = self.max_size {
            cfg.max_content_length = max;
        }
        if let Some(j) = self.jobs {
            cfg.jobs = j;
        }
        cfg.jobs = cfg.jobs.max(1);
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = match &cli.config {
        Some(path) => config::load_or_init_at(path)?,
        None => config::load_or_init()?,
    };
    cli.apply_overrides(&mut cfg);
    tracing::debug!("loaded config: {:?}", cfg);

    fetch::run_fetch(&cli.urls, &cfg)
}

#[cfg(test)]
mod tests;
