use persona_cli::config::Profile;
use persona_test::TestEnv;
use predicates::prelude::predicate;

fn two_profiles() -> TestEnv {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox.add(&Profile::new("home", "Jane", "jane@home.example"));
    sandbox.use_profile("work");
    sandbox
}

#[test]
fn active_profile_cannot_be_deleted() {
    let sandbox = two_profiles();
    let before = sandbox.store();
    sandbox
        .new_cmd("delete")
        .args(["work", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot delete active profile 'work'",
        ));
    assert_eq!(sandbox.store(), before);
}

#[test]
fn force_skips_confirmation() {
    let sandbox = two_profiles();
    sandbox
        .new_cmd("rm")
        .args(["home", "--force"])
        .assert()
        .success();
    assert_eq!(sandbox.store().names(), ["work"]);
}

#[test]
fn confirmation_yes_deletes() {
    let sandbox = two_profiles();
    sandbox
        .new_cmd("delete")
        .arg("home")
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Profile 'home' deleted"));
    assert_eq!(sandbox.store().names(), ["work"]);
}

#[test]
fn declined_confirmation_keeps_profile() {
    let sandbox = two_profiles();
    sandbox
        .new_cmd("delete")
        .arg("home")
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Deletion cancelled."));
    assert_eq!(sandbox.store().names(), ["work", "home"]);
}

#[test]
fn unknown_profile_lists_alternatives() {
    let sandbox = two_profiles();
    sandbox
        .new_cmd("delete")
        .args(["gone", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'gone' not found."))
        .stderr(predicate::str::contains("  - home"));
}

#[test]
fn nothing_to_select_when_only_active_remains() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox.use_profile("work");
    sandbox
        .new_cmd("delete")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profiles available to delete"));
}

#[test]
fn empty_store_hints_at_add() {
    let sandbox = TestEnv::default();
    sandbox
        .new_cmd("delete")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run `persona add` first."));
}
