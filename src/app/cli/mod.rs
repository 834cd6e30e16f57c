//! CLI Adapter.

mod service;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "svcopen")]
#[command(version)]
#[command(about = "Resolve cluster services to reachable route or node-port URLs", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Config file (default: ~/.svcopen/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or open the URL of a service, or list it across namespaces
    #[clap(visible_alias = "svc")]
    Service(service::ServiceArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Service(args) => service::run_service(args, cli.config.as_deref()),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
