//! Pure resolution of a service name to a single reachable endpoint.

mod error;

use std::fmt;

pub use error::ResolutionError;

use crate::domain::ServiceRecord;

/// Inputs for one resolution pass besides the record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveQuery {
    /// Service name to look up.
    pub name: String,
    /// Address of the cluster host, used for node-port URLs.
    pub host_address: String,
    /// Use `https` instead of `http` for node-port URLs.
    pub prefer_https: bool,
    /// Namespace the record collection was already restricted to, if any.
    pub namespace: Option<String>,
}

/// Where a resolved URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    Route,
    NodePort,
}

impl EndpointSource {
    pub fn label(&self) -> &'static str {
        match self {
            EndpointSource::Route => "route",
            EndpointSource::NodePort => "node port",
        }
    }
}

/// A single endpoint chosen for a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub namespace: String,
    pub name: String,
    pub url: String,
    pub source: EndpointSource,
}

impl fmt::Display for ResolvedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Records whose name equals `name`, in collection order.
pub fn matching<'a>(
    records: &'a [ServiceRecord],
    name: &'a str,
) -> impl Iterator<Item = &'a ServiceRecord> + 'a {
    records.iter().filter(move |record| record.name == name)
}

/// Distinct namespaces holding `name`, in first-seen order.
pub fn candidate_namespaces(records: &[ServiceRecord], name: &str) -> Vec<String> {
    let mut namespaces: Vec<String> = Vec::new();
    for record in matching(records, name) {
        if !namespaces.contains(&record.namespace) {
            namespaces.push(record.namespace.clone());
        }
    }
    namespaces
}

/// Resolve `query.name` to one endpoint.
///
/// A route URL always wins over a node port; weights never influence the choice.
/// When a namespace holds the same name twice, the first record wins.
pub fn resolve(
    records: &[ServiceRecord],
    query: &ResolveQuery,
) -> Result<ResolvedEndpoint, ResolutionError> {
    let namespaces = candidate_namespaces(records, &query.name);

    let record = match namespaces.len() {
        0 => {
            return Err(ResolutionError::NotFound {
                name: query.name.clone(),
                namespace: query.namespace.clone(),
            });
        }
        1 => matching(records, &query.name).next().ok_or_else(|| ResolutionError::NotFound {
            name: query.name.clone(),
            namespace: query.namespace.clone(),
        })?,
        _ => {
            return Err(ResolutionError::AmbiguousNamespace {
                name: query.name.clone(),
                namespaces,
            });
        }
    };

    let (url, source) = if let Some(route) = record.route_urls.first() {
        (route.clone(), EndpointSource::Route)
    } else if let Some(port) = record.node_port() {
        let scheme = if query.prefer_https { "https" } else { "http" };
        (format!("{}://{}:{}", scheme, query.host_address, port), EndpointSource::NodePort)
    } else {
        return Err(ResolutionError::NoEndpoint {
            name: record.name.clone(),
            namespace: record.namespace.clone(),
        });
    };

    Ok(ResolvedEndpoint {
        namespace: record.namespace.clone(),
        name: record.name.clone(),
        url,
        source,
    })
}
