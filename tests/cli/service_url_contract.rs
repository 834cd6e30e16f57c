use crate::harness::TestContext;

#[test]
fn url_prints_node_port_with_host_address() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "--url", "docker-registry"])
        .assert()
        .success()
        .stdout("http://192.168.42.10:30500\n");
}

#[test]
fn https_flag_changes_node_port_scheme() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "-u", "--https", "docker-registry"])
        .assert()
        .success()
        .stdout("https://192.168.42.10:30500\n");
}

#[test]
fn namespace_selects_first_route() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "-n", "myproject", "-u", "--https", "frontend"])
        .assert()
        .success()
        .stdout("http://frontend-myproject.192.168.42.10.nip.io\n");
}

#[test]
fn namespace_restriction_reaches_node_port_service() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["svc", "--namespace", "staging", "--url", "frontend"])
        .assert()
        .success()
        .stdout("http://192.168.42.10:31080\n");
}

#[test]
fn repeated_lookups_are_identical() {
    let ctx = TestContext::new();

    let first = ctx.cli().args(["service", "-u", "docker-registry"]).output().unwrap();
    let second = ctx.cli().args(["service", "-u", "docker-registry"]).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
