use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::{Config, ConfigError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigIoError {
    #[error("no config found at {0} (run `eod init` first)")]
    Missing(PathBuf),
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Read and validate the config file. Absent sections fall back to
/// defaults; a file that fails validation is rejected whole.
pub fn load_config(path: &Path) -> Result<Config, ConfigIoError> {
    if !path.exists() {
        return Err(ConfigIoError::Missing(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigIoError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigIoError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    config.validate()?;
    Ok(config)
}
