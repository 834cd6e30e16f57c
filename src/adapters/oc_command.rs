//! Cluster state fetched through the `oc` CLI.

use std::process::Command;

use serde::Deserialize;

use crate::domain::{AppError, ServiceRecord};
use crate::ports::ClusterStatePort;

#[derive(Debug, Clone)]
pub struct OcCommandAdapter {
    binary: String,
}

impl OcCommandAdapter {
    pub fn new(binary: impl Into<String>) -> Self {
        Self { binary: binary.into() }
    }

    fn run_oc(&self, args: &[&str]) -> Result<String, AppError> {
        tracing::debug!(binary = %self.binary, ?args, "running oc");

        let output = Command::new(&self.binary).args(args).output().map_err(|e| {
            AppError::ExternalToolError {
                tool: self.binary.clone(),
                error: format!("Failed to execute {}: {}", self.binary, e),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::ExternalToolError {
                tool: self.binary.clone(),
                error: format!("command failed: {}", stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn get_json(&self, resource: &str, namespace: Option<&str>) -> Result<String, AppError> {
        let mut args = vec!["get", resource, "-o", "json"];
        match namespace {
            Some(ns) => args.extend(["-n", ns]),
            None => args.push("--all-namespaces"),
        }
        self.run_oc(&args)
    }
}

impl ClusterStatePort for OcCommandAdapter {
    fn list_services(&self, namespace: Option<&str>) -> Result<Vec<ServiceRecord>, AppError> {
        let services = self.get_json("services", namespace)?;
        let routes = self.get_json("routes", namespace)?;
        let records = join_services(&services, &routes)?;
        tracing::debug!(count = records.len(), "fetched services from cluster");
        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct List<T> {
    #[serde(default)]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    name: String,
    #[serde(default)]
    namespace: String,
}

#[derive(Debug, Deserialize)]
struct Service {
    metadata: Metadata,
    #[serde(default)]
    spec: ServiceSpec,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceSpec {
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    ports: Vec<ServicePort>,
}

#[derive(Debug, Deserialize)]
struct ServicePort {
    #[serde(default, rename = "nodePort")]
    node_port: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct Route {
    metadata: Metadata,
    spec: RouteSpec,
}

#[derive(Debug, Deserialize)]
struct RouteSpec {
    #[serde(default)]
    host: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    tls: Option<serde_json::Value>,
    to: RouteBackend,
    #[serde(default, rename = "alternateBackends")]
    alternate_backends: Vec<RouteBackend>,
}

#[derive(Debug, Deserialize)]
struct RouteBackend {
    name: String,
    #[serde(default)]
    weight: Option<u32>,
}

impl Route {
    fn url(&self) -> String {
        let scheme = if self.spec.tls.as_ref().is_some_and(|tls| !tls.is_null()) {
            "https"
        } else {
            "http"
        };
        format!("{}://{}{}", scheme, self.spec.host, self.spec.path.as_deref().unwrap_or(""))
    }

    fn backends(&self) -> impl Iterator<Item = &RouteBackend> {
        std::iter::once(&self.spec.to).chain(self.spec.alternate_backends.iter())
    }

    /// Share of traffic `service` receives through this route, e.g. `75%`.
    fn weight_for(&self, service: &str) -> String {
        let total: u64 = self.backends().map(RouteBackend::effective_weight).sum();
        let own: u64 = self
            .backends()
            .filter(|backend| backend.name == service)
            .map(RouteBackend::effective_weight)
            .sum();
        if total == 0 {
            return "0%".to_string();
        }
        format!("{}%", own * 100 / total)
    }
}

impl RouteBackend {
    // Routes default the primary backend weight to 100.
    fn effective_weight(&self) -> u64 {
        self.weight.map_or(100, u64::from)
    }
}

fn parse_list<T: for<'de> Deserialize<'de>>(what: &str, json: &str) -> Result<Vec<T>, AppError> {
    let list: List<T> = serde_json::from_str(json)
        .map_err(|e| AppError::ParseError { what: what.to_string(), details: e.to_string() })?;
    Ok(list.items)
}

/// Join `oc get services` and `oc get routes` JSON output into service records.
pub(crate) fn join_services(
    services_json: &str,
    routes_json: &str,
) -> Result<Vec<ServiceRecord>, AppError> {
    let services: Vec<Service> = parse_list("oc service list", services_json)?;
    let routes: Vec<Route> = parse_list("oc route list", routes_json)?;

    let mut records = Vec::with_capacity(services.len());
    for service in services {
        let mut record = ServiceRecord::new(service.metadata.namespace, service.metadata.name)?;

        let exposes_node_port =
            matches!(service.spec.kind.as_deref(), Some("NodePort" | "LoadBalancer"));
        if exposes_node_port
            && let Some(port) = service.spec.ports.iter().find_map(|port| port.node_port)
        {
            record = record.with_node_port(port.to_string());
        }

        let (namespace, name) = (record.namespace.clone(), record.name.clone());
        for route in routes.iter().filter(|route| {
            route.metadata.namespace == namespace
                && route.backends().any(|backend| backend.name == name)
        }) {
            let weight = route.weight_for(&name);
            record = record.with_route(route.url(), Some(weight.as_str()));
        }

        records.push(record);
    }
    Ok(records)
}
