use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn existing_package_name_becomes_the_bower_name() {
    let ctx = TestContext::new();
    ctx.write("package.json", r#"{"name": "legacy-proj", "version": "2.1.0"}"#);

    ctx.generate(&["--name", "Brand New"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding additional packages to package.json"))
        .stdout(predicate::str::contains("• gulp-webserver"));

    let package = ctx.read_json("package.json");
    assert_eq!(package["name"], "legacy-proj");
    assert_eq!(package["version"], "2.1.0");
    assert_eq!(package["devDependencies"]["gulp"], "^3.9.0");

    assert_eq!(ctx.read_json("bower.json")["name"], "legacy-proj");
}

#[test]
fn user_pinned_versions_are_kept() {
    let ctx = TestContext::new();
    ctx.write(
        "bower.json",
        r#"{"name": "site", "dependencies": {"angular": "1.6.0", "lodash": "4.0.0"}}"#,
    );

    ctx.generate(&["--name", "Site"]).assert().success();

    let bower = ctx.read_json("bower.json");
    assert_eq!(bower["dependencies"]["angular"], "1.6.0");
    assert_eq!(bower["dependencies"]["lodash"], "4.0.0");
    assert_eq!(bower["dependencies"]["jquery"], "~1.9.1");
    assert_eq!(bower["name"], "site");
}

#[test]
fn quoted_package_name_survives_into_bower_and_reruns() {
    let ctx = TestContext::new();
    ctx.write("package.json", r#"{"name": "legacy \"q\" \\ proj"}"#);

    ctx.generate(&["--name", "Quoted", "--appId", r#"abc"'\x"#]).assert().success();

    assert_eq!(ctx.read_json("bower.json")["name"], r#"legacy "q" \ proj"#);
    let bower = ctx.read("bower.json");

    ctx.generate(&["--name", "Quoted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bower.json already declares the required packages"));
    assert_eq!(ctx.read("bower.json"), bower);
}
