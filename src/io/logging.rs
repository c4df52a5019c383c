use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an EnvFilter directive
pub const LOG_ENV: &str = "TODOPAD_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("logging already initialized: {0}")]
    InitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Pick the filter directive: env var, then config, then "info".
pub fn filter_directive(env_value: Option<&str>, config_level: Option<&str>) -> String {
    env_value
        .filter(|s| !s.trim().is_empty())
        .or(config_level.filter(|s| !s.trim().is_empty()))
        .unwrap_or(DEFAULT_DIRECTIVE)
        .to_string()
}

/// Send tracing output to `path` (appending). The terminal belongs to the
/// UI, so nothing is ever written to stdout/stderr.
pub fn init_file_logging(path: &Path, config_level: Option<&str>) -> Result<(), LoggingError> {
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::OpenError {
            path: path.to_path_buf(),
            source: e,
        })?;

    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env_value.as_deref(), config_level);

    tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(())
}
