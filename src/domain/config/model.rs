//! Configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration loaded from `~/.svcopen/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SvcopenConfig {
    /// Backing host configuration.
    #[serde(default)]
    pub host: HostConfig,
    /// Cluster-state provider configuration.
    #[serde(default)]
    pub cluster: ClusterConfig,
}

impl SvcopenConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.host.validate()?;
        self.cluster.validate()?;
        Ok(())
    }
}

/// Backing host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Machine name passed to the driver CLI.
    #[serde(default = "default_machine")]
    pub machine: String,
    /// Driver CLI used for status and address lookups.
    #[serde(default = "default_driver")]
    pub driver: String,
    /// Fixed host address. Skips the driver entirely.
    #[serde(default)]
    pub address: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { machine: default_machine(), driver: default_driver(), address: None }
    }
}

impl HostConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.machine.trim().is_empty() {
            return Err(AppError::config_error("host.machine must not be empty"));
        }
        if self.driver.trim().is_empty() {
            return Err(AppError::config_error("host.driver must not be empty"));
        }
        if self.address.as_deref().is_some_and(|addr| addr.trim().is_empty()) {
            return Err(AppError::config_error("host.address must not be empty when set"));
        }
        Ok(())
    }
}

fn default_machine() -> String {
    "minishift".to_string()
}

fn default_driver() -> String {
    "docker-machine".to_string()
}

/// Where service records come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterProvider {
    /// Query a live cluster through the `oc` CLI.
    #[default]
    Oc,
    /// Read a pre-fetched list of records from a file.
    Snapshot,
}

/// Cluster-state provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterConfig {
    #[serde(default)]
    pub provider: ClusterProvider,
    #[serde(default = "default_oc_binary")]
    pub oc_binary: String,
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self { provider: ClusterProvider::default(), oc_binary: default_oc_binary(), snapshot: None }
    }
}

impl ClusterConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.oc_binary.trim().is_empty() {
            return Err(AppError::config_error("cluster.oc_binary must not be empty"));
        }
        if self.provider == ClusterProvider::Snapshot && self.snapshot.is_none() {
            return Err(AppError::config_error(
                "cluster.snapshot is required when cluster.provider = \"snapshot\"",
            ));
        }
        Ok(())
    }
}

fn default_oc_binary() -> String {
    "oc".to_string()
}
