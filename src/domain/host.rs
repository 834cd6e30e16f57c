use std::fmt;

/// State of the VM host backing the cluster, as reported by its driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostStatus {
    Running,
    Stopped,
    Paused,
    Error,
    Unknown(String),
}

impl HostStatus {
    /// Parse the single-word state printed by machine drivers.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Running" => HostStatus::Running,
            "Stopped" => HostStatus::Stopped,
            "Paused" | "Saved" => HostStatus::Paused,
            "Error" => HostStatus::Error,
            other => HostStatus::Unknown(other.to_string()),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, HostStatus::Running)
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostStatus::Running => f.write_str("Running"),
            HostStatus::Stopped => f.write_str("Stopped"),
            HostStatus::Paused => f.write_str("Paused"),
            HostStatus::Error => f.write_str("Error"),
            HostStatus::Unknown(raw) if raw.is_empty() => f.write_str("Unknown"),
            HostStatus::Unknown(raw) => f.write_str(raw),
        }
    }
}
