//! Service records as seen by the cluster view at query time.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// One service known to the cluster, identified by `(namespace, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceRecord {
    pub namespace: String,
    pub name: String,
    /// Externally routed URLs. The first entry is the primary route.
    #[serde(default, rename = "routeURLs")]
    pub route_urls: Vec<String>,
    /// Port (or `host:port` fragment) exposed directly on the cluster host.
    #[serde(default, rename = "nodePort", skip_serializing_if = "Option::is_none")]
    pub node_port: Option<String>,
    /// Weight labels aligned with `route_urls`. Display only.
    #[serde(default)]
    pub weights: Vec<String>,
}

impl ServiceRecord {
    /// Create a record with no routes and no node port.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self, AppError> {
        let record = Self {
            namespace: namespace.into(),
            name: name.into(),
            route_urls: Vec::new(),
            node_port: None,
            weights: Vec::new(),
        };
        record.validate()?;
        Ok(record)
    }

    pub fn with_route(mut self, url: impl Into<String>, weight: Option<&str>) -> Self {
        self.route_urls.push(url.into());
        if let Some(weight) = weight {
            self.weights.push(weight.to_string());
        }
        self
    }

    pub fn with_node_port(mut self, node_port: impl Into<String>) -> Self {
        self.node_port = Some(node_port.into());
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.namespace.trim().is_empty() {
            return Err(AppError::InvalidRecord(format!(
                "service '{}' has an empty namespace",
                self.name
            )));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidRecord(format!(
                "service in namespace '{}' has an empty name",
                self.namespace
            )));
        }
        Ok(())
    }

    /// Node port, treating an empty string the same as an absent one.
    pub fn node_port(&self) -> Option<&str> {
        self.node_port.as_deref().filter(|port| !port.is_empty())
    }

    /// `host:nodePort` as shown in the table, if a node port is exposed.
    pub fn node_port_address(&self, host_address: &str) -> Option<String> {
        self.node_port().map(|port| format!("{}:{}", host_address, port))
    }
}
