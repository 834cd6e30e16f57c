//! Configuration loading from disk.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::config::{self, paths};
use crate::domain::{AppError, SvcopenConfig};

/// Where configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Named by `--config` or `$SVCOPEN_CONFIG`; must exist.
    Explicit(PathBuf),
    /// `~/.svcopen/config.toml`; defaults apply when absent.
    Default(PathBuf),
    /// No home directory could be determined.
    Unavailable,
}

impl ConfigLocation {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigLocation::Explicit(path) | ConfigLocation::Default(path) => Some(path),
            ConfigLocation::Unavailable => None,
        }
    }
}

/// Pick the config file: explicit path, then `$SVCOPEN_CONFIG`, then the home default.
pub fn locate_config(explicit: Option<&Path>) -> ConfigLocation {
    if let Some(path) = explicit {
        return ConfigLocation::Explicit(path.to_path_buf());
    }
    if let Some(path) = env::var_os(paths::CONFIG_ENV).filter(|value| !value.is_empty()) {
        return ConfigLocation::Explicit(PathBuf::from(path));
    }
    match dirs::home_dir() {
        Some(home) => ConfigLocation::Default(paths::config(&home)),
        None => ConfigLocation::Unavailable,
    }
}

/// Load and parse configuration from `location`.
pub fn load_config(location: &ConfigLocation) -> Result<SvcopenConfig, AppError> {
    let path = match location {
        ConfigLocation::Explicit(path) => path,
        ConfigLocation::Default(path) if path.exists() => path,
        ConfigLocation::Default(_) | ConfigLocation::Unavailable => {
            tracing::debug!("no config file found, using defaults");
            return Ok(SvcopenConfig::default());
        }
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to read config {}: {}", path.display(), e))
    })?;
    config::parse_config_content(&content)
}
