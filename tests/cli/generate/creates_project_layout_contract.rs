use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_creates_manifests_and_app_tree_under_root_path() {
    let ctx = TestContext::new();

    ctx.generate(&["--name", "My Project!!", "--root-path", "src", "--appId", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created package.json"))
        .stdout(predicate::str::contains("✅ Created bower.json"))
        .stdout(predicate::str::contains("Generated 'My Project'"))
        .stdout(predicate::str::contains("Skipped dependency installation"));

    let package = ctx.read_json("package.json");
    assert_eq!(package["name"], "my-project");
    assert_eq!(package["devDependencies"]["gulp"], "^3.9.0");
    assert_eq!(package["devDependencies"]["gulp-webserver"], "^0.9.1");

    let bower = ctx.read_json("bower.json");
    assert_eq!(bower["name"], "my-project");
    assert_eq!(bower["dependencies"]["adal-angular"], "~1.0.5");

    assert_eq!(ctx.read_json(".bowerrc")["directory"], "src/lib");
    assert!(ctx.exists("gulpfile.js"));
    assert!(ctx.exists("src/index.html"));
    assert!(ctx.exists("src/images/close.png"));
    assert!(ctx.exists("src/app/services/data.service.js"));
    assert!(!ctx.exists("index.html"));

    let app_config = ctx.read("src/app/app.config.js");
    assert!(app_config.contains("\"abc\""));
    assert!(app_config.contains("My Project"));
    assert!(!app_config.contains("{{"));
}

#[test]
fn empty_root_path_writes_app_into_destination_root() {
    let ctx = TestContext::new();

    ctx.generate(&["--name", "Flat", "--root-path", ""]).assert().success();

    assert!(ctx.exists("index.html"));
    assert!(ctx.exists("app/app.module.js"));
    assert_eq!(ctx.read_json(".bowerrc")["directory"], "lib");
}

#[test]
fn explicit_current_folder_names_a_real_directory() {
    let ctx = TestContext::new();

    ctx.generate(&["--name", "Literal", "--root-path", "current folder"]).assert().success();

    assert!(ctx.exists("current folder/index.html"));
    assert!(!ctx.exists("index.html"));
}

#[test]
fn defaults_apply_when_nothing_is_supplied() {
    let ctx = TestContext::new();

    ctx.generate(&[]).assert().success();

    assert_eq!(ctx.read_json("package.json")["name"], "my-office-project");
    assert!(ctx.exists("index.html"));
    let app_config = ctx.read("app/app.config.js");
    assert!(app_config.contains("00000000-0000-0000-0000-000000000000"));
}
