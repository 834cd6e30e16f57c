//! `service` subcommand arguments.

use std::path::Path;

use clap::Args;

use crate::app::commands::service::{OutputMode, ServiceOptions};
use crate::domain::AppError;

#[derive(Args)]
pub struct ServiceArgs {
    /// Name of the service
    #[arg(value_name = "SERVICE")]
    names: Vec<String>,
    /// The namespace of the service (default: all namespaces)
    #[arg(short = 'n', long)]
    namespace: Option<String>,
    /// Print the service URL to standard output
    #[arg(short = 'u', long)]
    url: bool,
    /// Access the service in the default browser
    #[arg(long)]
    in_browser: bool,
    /// Access the service with HTTPS instead of HTTP
    #[arg(long)]
    https: bool,
}

pub fn run_service(args: ServiceArgs, config: Option<&Path>) -> Result<(), AppError> {
    let mode = OutputMode::from_flags(args.url, args.in_browser)?;
    let options = ServiceOptions::from_args(&args.names, args.namespace, mode, args.https)?;
    crate::app::api::service(config, &options)?;
    Ok(())
}
