use std::cell::RefCell;

use crate::domain::{AppError, ServiceRecord};
use crate::ports::ClusterStatePort;

/// In-memory cluster that remembers which namespace filters it was asked for.
pub struct FakeCluster {
    records: Vec<ServiceRecord>,
    requests: RefCell<Vec<Option<String>>>,
}

impl FakeCluster {
    pub fn new(records: Vec<ServiceRecord>) -> Self {
        Self { records, requests: RefCell::new(Vec::new()) }
    }

    pub fn requested_namespaces(&self) -> Vec<Option<String>> {
        self.requests.borrow().clone()
    }
}

impl ClusterStatePort for FakeCluster {
    fn list_services(&self, namespace: Option<&str>) -> Result<Vec<ServiceRecord>, AppError> {
        self.requests.borrow_mut().push(namespace.map(str::to_string));
        Ok(self
            .records
            .iter()
            .filter(|record| namespace.is_none_or(|ns| record.namespace == ns))
            .cloned()
            .collect())
    }
}
