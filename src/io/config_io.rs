use std::fs;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};

use crate::model::config::AppConfig;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TODOPAD_CONFIG";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid timestamp_format {0:?}")]
    InvalidTimestampFormat(String),
}

/// Where the config comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by the user (flag or env); must exist
    Required(PathBuf),
    /// Default location; may be absent
    Optional(PathBuf),
    /// Nowhere to look
    Defaults,
}

/// Pick the config location: explicit path, then env var, then the per-user
/// config directory.
pub fn resolve_config_source(
    explicit: Option<&Path>,
    env_value: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Required(path.to_path_buf());
    }
    if let Some(path) = env_value.filter(|p| !p.as_os_str().is_empty()) {
        return ConfigSource::Required(path);
    }
    match config_dir {
        Some(dir) => ConfigSource::Optional(dir.join("todopad").join("config.toml")),
        None => ConfigSource::Defaults,
    }
}

/// Resolve and load the config for this process.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let source = resolve_config_source(
        explicit,
        std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        dirs::config_dir(),
    );
    load_from_source(&source)
}

pub fn load_from_source(source: &ConfigSource) -> Result<AppConfig, ConfigError> {
    match source {
        ConfigSource::Required(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.clone()));
            }
            read_config(path)
        }
        ConfigSource::Optional(path) if path.exists() => read_config(path),
        ConfigSource::Optional(_) | ConfigSource::Defaults => Ok(AppConfig::default()),
    }
}

/// Read and validate a config file
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: AppConfig = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate_timestamp_format(&config.ui.timestamp_format)?;
    Ok(config)
}

fn validate_timestamp_format(fmt: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidTimestampFormat(fmt.to_string()));
    }
    Ok(())
}
