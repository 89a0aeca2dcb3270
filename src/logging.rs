//! File logging. The terminal belongs to the UI, so log lines go to a file
//! under the XDG state directory (or wherever `logging.file` points).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_path};

/// Install the global subscriber. Returns the log file path when logging is
/// active.
pub fn init(settings: &LoggingSettings) -> anyhow::Result<Option<PathBuf>> {
    if !settings.enabled {
        return Ok(None);
    }
    let Some(path) = settings.file.as_ref().map(PathBuf::from).or_else(default_log_path) else {
        return Ok(None);
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    // RUST_LOG wins over the configured level.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(&settings.level).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    Ok(Some(path))
}
