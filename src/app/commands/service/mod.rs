//! `service` command: look up a service and present its endpoint.

mod options;
mod table;

use std::io::Write;

pub use options::{OutputMode, ServiceOptions};
pub use table::{HEADER, render_table};

use crate::app::AppContext;
use crate::app::commands::host_check;
use crate::domain::{AppError, ResolveQuery, ResolvedEndpoint, ServiceRecord, resolve};
use crate::ports::{BrowserPort, ClusterStatePort, HostPort};

/// Result of a `service` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceOutcome {
    /// Rendered table of every matching record.
    Table(String),
    /// URL printed to the output.
    Url(ResolvedEndpoint),
    /// URL handed to the browser. `launched` is false when the launcher failed.
    Browser { endpoint: ResolvedEndpoint, launched: bool },
}

/// Execute the `service` command, writing user-facing output to `out`.
pub fn execute<C, H, B, W>(
    ctx: &AppContext<C, H, B>,
    options: &ServiceOptions,
    out: &mut W,
) -> Result<ServiceOutcome, AppError>
where
    C: ClusterStatePort,
    H: HostPort,
    B: BrowserPort,
    W: Write,
{
    let host_address = host_check::ensure_running(ctx.host())?;
    let records = ctx.cluster().list_services(options.namespace.as_deref())?;
    tracing::debug!(
        service = %options.name,
        namespace = ?options.namespace,
        mode = ?options.mode,
        records = records.len(),
        "looking up service"
    );

    match options.mode {
        OutputMode::Table => {
            let table = render_table(&records, &options.name, &host_address);
            writeln!(out, "{}", table)?;
            Ok(ServiceOutcome::Table(table))
        }
        OutputMode::Url => {
            let endpoint = resolve_endpoint(&records, options, host_address)?;
            writeln!(out, "{}", endpoint)?;
            Ok(ServiceOutcome::Url(endpoint))
        }
        OutputMode::Browser => {
            let endpoint = resolve_endpoint(&records, options, host_address)?;
            writeln!(out, "Opening the route/NodePort {} in the default browser...", endpoint)?;
            let launched = match ctx.browser().open(&endpoint.url) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "browser launch failed");
                    eprintln!("⚠️  Could not open browser automatically: {}", e);
                    false
                }
            };
            Ok(ServiceOutcome::Browser { endpoint, launched })
        }
    }
}

fn resolve_endpoint(
    records: &[ServiceRecord],
    options: &ServiceOptions,
    host_address: String,
) -> Result<ResolvedEndpoint, AppError> {
    let query = ResolveQuery {
        name: options.name.clone(),
        host_address,
        prefer_https: options.prefer_https,
        namespace: options.namespace.clone(),
    };
    let endpoint = resolve(records, &query)?;
    tracing::info!(
        service = %endpoint.name,
        namespace = %endpoint.namespace,
        source = endpoint.source.label(),
        url = %endpoint.url,
        "resolved service"
    );
    Ok(endpoint)
}
