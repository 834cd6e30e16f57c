use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn table_is_default_and_shows_every_namespace() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "frontend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Namespace"))
        .stdout(predicate::str::contains("Route-URL"))
        .stdout(predicate::str::contains("myproject"))
        .stdout(predicate::str::contains("staging"))
        .stdout(predicate::str::contains("192.168.42.10:31080"))
        .stdout(predicate::str::contains("http://frontend-canary.192.168.42.10.nip.io"))
        .stdout(predicate::str::contains("20%"));
}

#[test]
fn table_for_unknown_service_is_header_only() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight"))
        .stdout(predicate::function(|out: &str| {
            out.lines().filter(|line| line.starts_with('|')).count() == 1
        }))
        .stdout(predicate::str::contains("frontend").not())
        .stdout(predicate::str::contains("docker-registry").not());
}

#[test]
fn table_respects_namespace_restriction() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["service", "-n", "staging", "frontend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("staging"))
        .stdout(predicate::str::contains("myproject").not());
}
