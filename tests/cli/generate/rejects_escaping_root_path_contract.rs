use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn root_path_escaping_destination_is_rejected() {
    let ctx = TestContext::new();

    ctx.generate(&["--name", "Escape", "--root-path", "../outside"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid root path"));

    assert!(!ctx.outer().join("outside").exists());
    assert!(!ctx.exists("package.json"));
}

#[test]
fn absolute_root_path_is_rejected() {
    let ctx = TestContext::new();

    ctx.generate(&["--name", "Abs", "--root-path", "/tmp/o365gen-abs"]).assert().failure();

    assert!(!ctx.exists("package.json"));
}
