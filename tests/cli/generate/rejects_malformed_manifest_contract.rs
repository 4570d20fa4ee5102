use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn malformed_package_manifest_aborts_before_any_write() {
    let ctx = TestContext::new();
    ctx.write("package.json", "{ \"name\": ");

    ctx.generate(&["--name", "Broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed manifest 'package.json'"));

    assert_eq!(ctx.read("package.json"), "{ \"name\": ");
    assert!(!ctx.exists("bower.json"));
    assert!(!ctx.exists("src/index.html"));
}

#[test]
fn malformed_bower_manifest_aborts_after_package_upsert() {
    let ctx = TestContext::new();
    ctx.write("bower.json", "[]");

    ctx.generate(&["--name", "Broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed manifest 'bower.json'"));

    assert!(ctx.exists("package.json"));
    assert_eq!(ctx.read("bower.json"), "[]");
    assert!(!ctx.exists("src/index.html"));
}

#[test]
fn non_utf8_manifest_is_reported_as_malformed() {
    let ctx = TestContext::new();
    std::fs::write(ctx.work_dir().join("package.json"), [0xff, 0xfe, b'{', b'}']).unwrap();

    ctx.generate(&["--name", "Bytes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed manifest 'package.json'"));

    assert!(!ctx.exists("bower.json"));
}
