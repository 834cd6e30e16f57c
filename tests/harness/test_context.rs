//! Shared testing harness for `svcopen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Snapshot used by most contracts: one ambiguous name, one node port, one bare service.
pub(crate) const DEFAULT_SNAPSHOT: &str = r#"
- namespace: default
  name: docker-registry
  nodePort: "30500"
- namespace: myproject
  name: frontend
  routeURLs:
    - http://frontend-myproject.192.168.42.10.nip.io
    - http://frontend-canary.192.168.42.10.nip.io
  weights: ["80%", "20%"]
- namespace: staging
  name: frontend
  nodePort: "31080"
- namespace: myproject
  name: database
"#;

/// Testing harness providing an isolated `$HOME` with a svcopen config.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create an environment with a static host and the default snapshot.
    pub(crate) fn new() -> Self {
        let ctx = Self::empty();
        ctx.write_snapshot(DEFAULT_SNAPSHOT);
        ctx.write_config(
            r#"[host]
address = "192.168.42.10"

[cluster]
provider = "snapshot"
snapshot = "services.yaml"
"#,
        );
        ctx
    }

    /// Create an environment without any config file.
    pub(crate) fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join(".svcopen"))
            .expect("Failed to create config directory");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to `~/.svcopen/config.toml`.
    pub(crate) fn config_path(&self) -> PathBuf {
        self.home().join(".svcopen").join("config.toml")
    }

    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub(crate) fn write_snapshot(&self, content: &str) {
        fs::write(self.home().join(".svcopen").join("services.yaml"), content)
            .expect("Failed to write snapshot");
    }

    /// Build a command for invoking the compiled `svcopen` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("svcopen").expect("Failed to locate svcopen binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env_remove("SVCOPEN_CONFIG")
            .env_remove("SVCOPEN_LOG");
        cmd
    }
}
