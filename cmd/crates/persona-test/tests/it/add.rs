use persona_cli::config::Profile;
use persona_test::TestEnv;
use predicates::prelude::predicate;

#[test]
fn add_with_flags_creates_store() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd("add")
        .args(["work", "--user", "Jane Doe", "--email", "jane@corp.example"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Profile 'work' added"));

    let store = sandbox.store();
    assert_eq!(
        store.profiles,
        [Profile::new("work", "Jane Doe", "jane@corp.example")]
    );
    assert_eq!(store.active_profile, "");
}

#[test]
fn add_prompts_for_missing_fields() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd("add")
        .write_stdin("work\nJane Doe\njane@corp.example\nABCD1234\nDay job\n")
        .assert()
        .success();

    assert_eq!(
        sandbox.store().profiles,
        [Profile::new("work", "Jane Doe", "jane@corp.example")
            .with_signing_key("ABCD1234")
            .with_description("Day job")]
    );
}

#[test]
fn duplicate_name_is_rejected() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox
        .new_cmd("add")
        .args(["work", "--user", "Other", "--email", "other@corp.example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'work' already exists"));

    assert_eq!(sandbox.store().profiles.len(), 1);
}

#[test]
fn empty_email_is_rejected() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd("add")
        .args(["work", "--user", "Jane", "--email", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile email cannot be empty"));

    assert!(!sandbox.config_file().exists());
}
