//! Diagnostics go to `imgfetch.log` under the XDG state directory; status
//! lines for the user are printed by the CLI, not logged.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info,imgfetch=debug,imgfetch_core=debug";

const LOG_FILE_NAME: &str = "imgfetch.log";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/imgfetch/imgfetch.log` (or under `$XDG_STATE_HOME`).
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.get_state_home().join(LOG_FILE_NAME))
}

/// Opens `path` for appending, creating it and its parent directory.
fn open_append(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log directory {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Install the global subscriber writing to the XDG log file. Returns the file path.
///
/// Errors leave no subscriber installed, so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_append(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!("imgfetch logging initialized at {}", path.display());
    Ok(path)
}

/// Stderr-only subscriber for when the log file is unavailable.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
