use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use super::config::app_config_dir;

const LOG_FILE: &str = "checkout-locale.log";

/// Install a file-backed tracing subscriber.
///
/// The terminal belongs to the UI, so events go to `checkout-locale.log` in
/// the app config directory. `RUST_LOG` overrides the default `info` filter.
pub fn init() -> Result<PathBuf> {
    let dir = app_config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE);

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(path)
}
