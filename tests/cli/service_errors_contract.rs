use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn ambiguous_name_lists_namespaces() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "--url", "frontend"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Service 'frontend' exists in multiple namespaces (myproject, staging)",
        ))
        .stderr(predicate::str::contains("-n <namespace>"));
}

#[test]
fn unknown_service_does_not_exist() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "-u", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Service 'nope' does not exist"));
}

#[test]
fn unknown_service_in_namespace_names_it() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "-n", "default", "-u", "frontend"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist in namespace 'default'"));
}

#[test]
fn service_without_endpoint_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "--url", "database"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Service 'database' in namespace 'myproject' does not have a route or node port",
        ));
}

#[test]
fn missing_service_name_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("service")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("You must specify the name of the service."));
}

#[test]
fn two_service_names_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "frontend", "database"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("You must specify the name of the service."));
}

#[test]
fn url_and_browser_are_exclusive() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "--url", "--in-browser", "docker-registry"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot be used together"));
}

#[test]
fn unknown_flag_exits_with_one() {
    let ctx = TestContext::new();

    ctx.cli().args(["service", "--bogus", "frontend"]).assert().code(1);
}

#[test]
fn help_exits_cleanly() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--in-browser"));
}
