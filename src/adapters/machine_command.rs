//! Backing host queried through a docker-machine compatible driver CLI.

use std::process::{Command, Output};

use crate::domain::{AppError, HostStatus};
use crate::ports::HostPort;

#[derive(Debug, Clone)]
pub struct MachineCommandAdapter {
    driver: String,
    machine: String,
}

impl MachineCommandAdapter {
    pub fn new(driver: impl Into<String>, machine: impl Into<String>) -> Self {
        Self { driver: driver.into(), machine: machine.into() }
    }

    fn run_driver(&self, subcommand: &str) -> Result<Output, AppError> {
        tracing::debug!(driver = %self.driver, machine = %self.machine, subcommand, "running driver");

        Command::new(&self.driver).args([subcommand, self.machine.as_str()]).output().map_err(
            |e| AppError::ExternalToolError {
                tool: self.driver.clone(),
                error: format!("Failed to execute {}: {}", self.driver, e),
            },
        )
    }
}

impl HostPort for MachineCommandAdapter {
    fn name(&self) -> &str {
        &self.machine
    }

    fn status(&self) -> Result<HostStatus, AppError> {
        let output = self.run_driver("status")?;
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            if stderr.contains("does not exist") {
                return Err(AppError::HostNotFound(self.machine.clone()));
            }
            return Err(AppError::ExternalToolError {
                tool: self.driver.clone(),
                error: format!("status failed: {}", stderr.trim()),
            });
        }

        Ok(HostStatus::parse(&String::from_utf8_lossy(&output.stdout)))
    }

    fn address(&self) -> Result<String, AppError> {
        let output = self.run_driver("ip")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::HostAddress(stderr.trim().to_string()));
        }

        let address = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if address.is_empty() {
            return Err(AppError::HostAddress(format!(
                "{} returned no address for '{}'",
                self.driver, self.machine
            )));
        }
        Ok(address)
    }
}
