//! Cluster state read from a pre-fetched snapshot file.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, ServiceRecord};
use crate::ports::ClusterStatePort;

/// Reads a list of service records from YAML, or JSON when the file ends in `.json`.
#[derive(Debug, Clone)]
pub struct SnapshotFileAdapter {
    path: PathBuf,
}

impl SnapshotFileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<ServiceRecord>, AppError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::config_error(format!(
                "Failed to read service snapshot {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let is_json = self.path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let records: Vec<ServiceRecord> = if is_json {
            serde_json::from_str(&content).map_err(|e| self.parse_error(e))?
        } else {
            serde_yaml::from_str(&content).map_err(|e| self.parse_error(e))?
        };

        for record in &records {
            record.validate()?;
        }
        Ok(records)
    }

    fn parse_error(&self, err: impl std::fmt::Display) -> AppError {
        AppError::ParseError {
            what: format!("service snapshot {}", self.path.display()),
            details: err.to_string(),
        }
    }
}

impl ClusterStatePort for SnapshotFileAdapter {
    fn list_services(&self, namespace: Option<&str>) -> Result<Vec<ServiceRecord>, AppError> {
        tracing::debug!(path = %self.path.display(), ?namespace, "reading service snapshot");
        let mut records = self.load()?;
        if let Some(ns) = namespace {
            records.retain(|record| record.namespace == ns);
        }
        Ok(records)
    }
}
