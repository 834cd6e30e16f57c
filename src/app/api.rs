//! Library entry points wiring configuration to concrete adapters.

use std::io;
use std::path::{Path, PathBuf};

use crate::adapters::{
    MachineCommandAdapter, OcCommandAdapter, SnapshotFileAdapter, StaticHost, SystemBrowser,
};
use crate::app::AppContext;
use crate::app::commands::service::{self, ServiceOptions, ServiceOutcome};
use crate::app::config::{ConfigLocation, load_config, locate_config};
use crate::domain::{AppError, ClusterConfig, ClusterProvider, HostConfig};
use crate::ports::{ClusterStatePort, HostPort};

/// Run the `service` command against the configured cluster, writing to stdout.
pub fn service(
    config_path: Option<&Path>,
    options: &ServiceOptions,
) -> Result<ServiceOutcome, AppError> {
    let location = locate_config(config_path);
    let config = load_config(&location)?;

    let cluster = cluster_adapter(&config.cluster, &location);
    let host = host_adapter(&config.host);
    let ctx = AppContext::new(cluster, host, SystemBrowser::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    service::execute(&ctx, options, &mut out)
}

fn cluster_adapter(
    cluster: &ClusterConfig,
    location: &ConfigLocation,
) -> Box<dyn ClusterStatePort> {
    match (cluster.provider, &cluster.snapshot) {
        (ClusterProvider::Snapshot, Some(path)) => {
            Box::new(SnapshotFileAdapter::new(snapshot_path(path, location)))
        }
        _ => Box::new(OcCommandAdapter::new(cluster.oc_binary.clone())),
    }
}

/// Relative snapshot paths are taken relative to the config file.
fn snapshot_path(path: &Path, location: &ConfigLocation) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match location.path().and_then(Path::parent) {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

fn host_adapter(host: &HostConfig) -> Box<dyn HostPort> {
    match &host.address {
        Some(address) => Box::new(StaticHost::new(host.machine.clone(), address.clone())),
        None => Box::new(MachineCommandAdapter::new(host.driver.clone(), host.machine.clone())),
    }
}
