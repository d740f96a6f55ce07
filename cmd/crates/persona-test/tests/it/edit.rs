use persona_cli::config::Profile;
use persona_test::TestEnv;
use predicates::prelude::predicate;

#[test]
fn flags_update_in_place() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox.add(&Profile::new("home", "Jane", "jane@home.example"));
    sandbox
        .new_cmd("edit")
        .args(["work", "--email", "jane@newcorp.example", "--description", "New job"])
        .assert()
        .success();
    assert_eq!(
        sandbox.store().profiles,
        [
            Profile::new("work", "Jane", "jane@newcorp.example").with_description("New job"),
            Profile::new("home", "Jane", "jane@home.example"),
        ]
    );
}

#[test]
fn renaming_active_profile_moves_reference() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox.use_profile("work");
    sandbox
        .new_cmd("edit")
        .args(["work", "--name", "job"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Profile 'job' updated"));
    let store = sandbox.store();
    assert_eq!(store.names(), ["job"]);
    assert_eq!(store.active_profile, "job");
}

#[test]
fn rename_onto_existing_name_fails() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("x", "Jane", "jane@x.example"));
    sandbox.add(&Profile::new("y", "Jane", "jane@y.example"));
    let before = sandbox.store();
    sandbox
        .new_cmd("edit")
        .args(["x", "--name", "y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'y' already exists"));
    assert_eq!(sandbox.store(), before);
}

#[test]
fn prompts_keep_current_values_on_empty_input() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox
        .new_cmd("edit")
        .arg("work")
        .write_stdin("\nJane Doe\n\nABCD\n\n")
        .assert()
        .success();
    assert_eq!(
        sandbox.store().profiles,
        [Profile::new("work", "Jane Doe", "jane@corp.example").with_signing_key("ABCD")]
    );
}

#[test]
fn unknown_profile_fails() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox
        .new_cmd("edit")
        .args(["gone", "--user", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'gone' not found."));
}
