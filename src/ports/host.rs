use crate::domain::{AppError, HostStatus};

/// Port for the VM host that backs the cluster.
pub trait HostPort {
    /// Name of the host, used in error messages.
    fn name(&self) -> &str;

    /// Current state as reported by the driver.
    fn status(&self) -> Result<HostStatus, AppError>;

    /// Address under which node ports are reachable.
    fn address(&self) -> Result<String, AppError>;
}
