//! Diagnostic logging
//!
//! Events go to a file only, never to the terminal, so they cannot tear the
//! TUI. Without a configured file logging stays off.
//!
//! `RUST_LOG` takes precedence over the configured level:
//! ```bash
//! RUST_LOG=kingx_calc=debug kingx-calc --config calc.yaml
//! ```

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{ConfigError, ConfigResult};

/// Build the event filter, preferring `RUST_LOG` over `level`
pub fn build_filter(level: &str) -> ConfigResult<EnvFilter> {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
    }
    EnvFilter::try_new(level).map_err(|e| ConfigError::logging(format!("bad level {level:?}: {e}")))
}

fn open_log_file(path: &Path) -> ConfigResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::io(path, source))
}

/// Install the global subscriber described by `config`
///
/// Returns `Ok(false)` when no log file is configured and nothing was
/// installed. Fails if the file cannot be opened, the level does not parse,
/// or a global subscriber already exists.
pub fn init(config: &LoggingConfig) -> ConfigResult<bool> {
    let Some(path) = config.file.as_deref() else {
        return Ok(false);
    };

    let filter = build_filter(&config.level)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}
