use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn second_run_leaves_manifests_unchanged() {
    let ctx = TestContext::new();
    let args = ["--name", "Twice", "--root-path", "src"];

    ctx.generate(&args).assert().success();
    let package = ctx.read("package.json");
    let bower = ctx.read("bower.json");

    ctx.generate(&args)
        .assert()
        .success()
        .stdout(predicate::str::contains("package.json already declares the required packages"))
        .stdout(predicate::str::contains("bower.json already declares the required packages"));

    assert_eq!(ctx.read("package.json"), package);
    assert_eq!(ctx.read("bower.json"), bower);
}
