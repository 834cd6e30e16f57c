//! Stand-ins for the `oc` and `docker-machine` CLIs.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SERVICES_JSON: &str = r#"{"items":[
{"metadata":{"name":"console","namespace":"openshift-web-console"},"spec":{"type":"NodePort","ports":[{"port":443,"nodePort":30443}]}},
{"metadata":{"name":"frontend","namespace":"myproject"},"spec":{"type":"ClusterIP","ports":[{"port":8080}]}}
]}"#;

const ROUTES_JSON: &str = r#"{"items":[
{"metadata":{"name":"frontend","namespace":"myproject"},"spec":{"host":"frontend-myproject.nip.io","tls":{"termination":"edge"},"to":{"kind":"Service","name":"frontend"}}}
]}"#;

pub(crate) struct FakeTools {
    pub root: TempDir,
    pub oc: PathBuf,
    pub driver: PathBuf,
    pub log_file: PathBuf,
}

impl FakeTools {
    /// Fake tools whose machine reports `status`.
    pub(crate) fn with_machine_status(status: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake tools");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("calls.log");

        let oc = bin_dir.join("oc");
        write_script(
            &oc,
            &format!(
                r#"#!/bin/sh
echo "oc $@" >> "{log}"
case "$2" in
    services) cat <<'JSON'
{services}
JSON
        ;;
    routes) cat <<'JSON'
{routes}
JSON
        ;;
    *) echo "unexpected resource $2" >&2; exit 1 ;;
esac
"#,
                log = log_file.display(),
                services = SERVICES_JSON,
                routes = ROUTES_JSON,
            ),
        );

        let driver = bin_dir.join("docker-machine");
        write_script(
            &driver,
            &format!(
                r#"#!/bin/sh
echo "driver $@" >> "{log}"
if [ "$2" != "minishift" ]; then
    echo "Host does not exist: \"$2\"" >&2
    exit 1
fi
case "$1" in
    status) echo "{status}" ;;
    ip) echo "192.168.99.100" ;;
esac
"#,
                log = log_file.display(),
                status = status,
            ),
        );

        Self { root, oc, driver, log_file }
    }

    /// Config pointing the adapters at the fake binaries.
    pub(crate) fn config(&self, machine: &str) -> String {
        format!(
            r#"[host]
machine = "{machine}"
driver = "{driver}"

[cluster]
oc_binary = "{oc}"
"#,
            machine = machine,
            driver = self.driver.display(),
            oc = self.oc.display(),
        )
    }

    /// Recorded invocations, one per line.
    pub(crate) fn calls(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake tool");
    let mut perms = fs::metadata(path).expect("Failed to stat fake tool").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod fake tool");
}
