use std::fs;
use std::path::{Path, PathBuf};

use crate::model::AppConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
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
}

/// Default config location: `$XDG_CONFIG_HOME/ticklist/config.toml`, falling
/// back to `~/.config/ticklist/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
    Some(base.join("ticklist").join("config.toml"))
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config. An explicit path must exist; the default location is
/// optional and falls back to built-in defaults when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading config");
            read_config(&path)
        }
        _ => Ok(AppConfig::default()),
    }
}
