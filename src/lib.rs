//! svcopen: resolve cluster services to reachable route or node-port URLs.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::Path;

pub use app::commands::service::{OutputMode, ServiceOptions, ServiceOutcome, render_table};
pub use domain::{
    AppError, EndpointSource, ResolutionError, ResolveQuery, ResolvedEndpoint, ServiceRecord,
    resolve,
};

/// Look up a service and present it according to `options.mode`.
///
/// Configuration is read from `config`, `$SVCOPEN_CONFIG`, or `~/.svcopen/config.toml`.
pub fn service(
    config: Option<&Path>,
    options: &ServiceOptions,
) -> Result<ServiceOutcome, AppError> {
    app::api::service(config, options)
}
