use crate::harness::TestContext;

#[test]
fn options_file_supplies_values_and_flags_override_it() {
    let ctx = TestContext::new();
    ctx.write(
        "o365gen.toml",
        "[generator]\nname = \"From File\"\nroot_path = \"web\"\napp_id = \"file-id\"\n",
    );

    ctx.generate(&["--appId", "flag-id"]).assert().success();

    assert_eq!(ctx.read_json("package.json")["name"], "from-file");
    let app_config = ctx.read("web/app/app.config.js");
    assert!(app_config.contains("\"flag-id\""));
    assert!(!app_config.contains("file-id"));
}

#[test]
fn unknown_option_keys_are_rejected() {
    let ctx = TestContext::new();
    ctx.write("o365gen.toml", "[generator]\ntitle = \"Oops\"\n");

    ctx.generate(&[]).assert().failure();

    assert!(!ctx.exists("package.json"));
}
