use crate::domain::{AppError, ServiceRecord};

/// Port for fetching the services visible in the cluster.
pub trait ClusterStatePort {
    /// List services, restricted to `namespace` when given, otherwise across all namespaces.
    fn list_services(&self, namespace: Option<&str>) -> Result<Vec<ServiceRecord>, AppError>;
}
