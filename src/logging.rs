//! Per-run file logging.
//!
//! One timestamped log file per invocation, created under the configured
//! directory. Initialization happens exactly once at process entry with
//! explicitly passed values; no component configures logging on its own.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use crate::{AisError, Result};

/// Initialize the tracing subscriber writing to a fresh log file and return
/// the file's path. Fails if a subscriber was already installed.
pub fn init(log_dir: &Path, verbose: bool) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)?;
    let file_name = format!("aisweb_{}.log", Local::now().format("%d-%m-%Y_%H-%M-%S"));
    let path = log_dir.join(file_name);
    let file = File::create(&path)?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AisError::config(format!("Failed to initialize logging: {}", e)))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_log_file_in_requested_dir() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = init(dir.path(), false).expect("init logging");
        assert!(path.exists());
        assert!(path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("aisweb_") && n.ends_with(".log")));

        // A second init must report the already-installed subscriber instead
        // of silently replacing it.
        assert!(init(dir.path(), true).is_err());
    }
}
