use persona_test::TestEnv;

#[test]
fn env_file_sets_config_file() {
    let sandbox = TestEnv::default();
    std::fs::write(
        sandbox.dir().join(".env"),
        "PERSONA_CONFIG_FILE=from-dotenv.toml\n",
    )
    .unwrap();
    sandbox
        .new_cmd("add")
        .args(["work", "--user", "Jane", "--email", "jane@corp.example"])
        .assert()
        .success();
    assert!(sandbox.dir().join("from-dotenv.toml").exists());
    assert!(!sandbox.config_file().exists());
}
