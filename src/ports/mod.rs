mod browser;
mod cluster_state;
mod host;

pub use browser::BrowserPort;
pub use cluster_state::ClusterStatePort;
pub use host::HostPort;

use crate::domain::{AppError, HostStatus, ServiceRecord};

impl<T: ClusterStatePort + ?Sized> ClusterStatePort for Box<T> {
    fn list_services(&self, namespace: Option<&str>) -> Result<Vec<ServiceRecord>, AppError> {
        (**self).list_services(namespace)
    }
}

impl<T: HostPort + ?Sized> HostPort for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn status(&self) -> Result<HostStatus, AppError> {
        (**self).status()
    }

    fn address(&self) -> Result<String, AppError> {
        (**self).address()
    }
}
