use crate::ports::{BrowserPort, ClusterStatePort, HostPort};

/// Application context holding the collaborators a command talks to.
pub struct AppContext<C: ClusterStatePort, H: HostPort, B: BrowserPort> {
    cluster: C,
    host: H,
    browser: B,
}

impl<C: ClusterStatePort, H: HostPort, B: BrowserPort> AppContext<C, H, B> {
    /// Create a new application context.
    pub fn new(cluster: C, host: H, browser: B) -> Self {
        Self { cluster, host, browser }
    }

    /// Get a reference to the cluster-state provider.
    pub fn cluster(&self) -> &C {
        &self.cluster
    }

    /// Get a reference to the backing host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Get a reference to the browser launcher.
    pub fn browser(&self) -> &B {
        &self.browser
    }
}
