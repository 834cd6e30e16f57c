use crate::domain::{AppError, HostStatus};
use crate::ports::HostPort;

/// Host with a fixed, configured address. Assumed to be running.
#[derive(Debug, Clone)]
pub struct StaticHost {
    name: String,
    address: String,
}

impl StaticHost {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self { name: name.into(), address: address.into() }
    }
}

impl HostPort for StaticHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> Result<HostStatus, AppError> {
        Ok(HostStatus::Running)
    }

    fn address(&self) -> Result<String, AppError> {
        Ok(self.address.clone())
    }
}
