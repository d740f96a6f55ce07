use persona_cli::config::Profile;
use persona_test::TestEnv;

#[test]
fn file_layout() {
    let sandbox = TestEnv::default();
    sandbox.add(
        &Profile::new("work", "Jane", "jane@corp.example")
            .with_signing_key("ABCD")
            .with_description("Day job"),
    );
    sandbox.use_profile("work");

    let raw = std::fs::read_to_string(sandbox.config_file()).unwrap();
    let table: toml::Table = raw.parse().unwrap();
    assert_eq!(table["active_profile"].as_str(), Some("work"));
    let profile = &table["profiles"].as_array().unwrap()[0];
    assert_eq!(profile["name"].as_str(), Some("work"));
    assert_eq!(profile["signingKey"].as_str(), Some("ABCD"));
    assert_eq!(profile["description"].as_str(), Some("Day job"));
}

#[test]
fn config_file_flag_overrides_dir() {
    let sandbox = TestEnv::default();
    let file = sandbox.dir().join("nested").join("profiles.toml");
    sandbox
        .new_cmd("add")
        .args(["work", "--user", "Jane", "--email", "jane@corp.example"])
        .arg("--config-file")
        .arg(&file)
        .assert()
        .success();
    assert!(file.exists());
    assert!(!sandbox.config_file().exists());
}

#[test]
fn malformed_store_is_reported() {
    let sandbox = TestEnv::default();
    std::fs::write(sandbox.config_file(), "profiles = 3\n").unwrap();
    sandbox
        .new_cmd("list")
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to deserialize"));
}
