/// Resolution capability error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("Service '{name}' does not exist{}", in_namespace(.namespace))]
    NotFound { name: String, namespace: Option<String> },

    #[error(
        "Service '{name}' exists in multiple namespaces ({}), you need to choose a specific namespace using -n <namespace>.",
        .namespaces.join(", ")
    )]
    AmbiguousNamespace { name: String, namespaces: Vec<String> },

    #[error(
        "Service '{name}' in namespace '{namespace}' does not have a route or node port which can be opened in the browser."
    )]
    NoEndpoint { name: String, namespace: String },
}

fn in_namespace(namespace: &Option<String>) -> String {
    match namespace {
        Some(ns) => format!(" in namespace '{}'", ns),
        None => String::new(),
    }
}
