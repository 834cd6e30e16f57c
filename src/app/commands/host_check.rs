//! Guard that the backing host is up before talking to the cluster.

use crate::domain::AppError;
use crate::ports::HostPort;

/// Return the host address if the host is running.
pub fn ensure_running<H: HostPort>(host: &H) -> Result<String, AppError> {
    let status = host.status()?;
    if !status.is_running() {
        return Err(AppError::HostNotRunning {
            machine: host.name().to_string(),
            status: status.to_string(),
        });
    }

    let address = host.address()?;
    tracing::debug!(host = host.name(), %address, "host is running");
    Ok(address)
}
