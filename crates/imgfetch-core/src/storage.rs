//! Disk side of the pipeline: output directory and atomic image writes.
//!
//! Bodies are written to a temp file inside the output directory, synced, and
//! renamed over the final name, so a reader never sees a half-written image.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create the output directory (and parents) if it does not exist.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}

/// Write `body` to `dir/filename`, replacing any existing file at that path.
/// Returns the final path.
pub fn save_image(dir: &Path, filename: &str, body: &[u8]) -> Result<PathBuf> {
    let final_path = dir.join(filename);

    let mut tmp = tempfile::Builder::new()
        .prefix(".imgfetch-")
        .suffix(".part")
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(body)
        .with_context(|| format!("failed to write {}", tmp.path().display()))?;
    tmp.as_file().sync_all().context("storage sync failed")?;
    tmp.persist(&final_path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to rename temp file to {}", final_path.display()))?;

    Ok(final_path)
}
