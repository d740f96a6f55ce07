use persona_cli::config::Profile;
use persona_test::TestEnv;
use predicates::prelude::predicate;

#[cfg(unix)]
#[test]
fn switches_globally() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox
        .new_cmd("use")
        .args(["work", "-g"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Switched to profile: work (globally)"));
    assert_eq!(sandbox.store().active_profile, "work");
}

#[test]
fn unknown_profile_changes_nothing() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox
        .new_cmd("use")
        .arg("gone")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'gone' not found."))
        .stderr(predicate::str::contains("  - work"));
    assert_eq!(sandbox.store().active_profile, "");
}

#[test]
fn missing_git_keeps_reference_and_explains_recovery() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox
        .new_cmd_with_git("use", "persona-test-no-such-git")
        .arg("work")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is now active but was not applied to git"))
        .stderr(predicate::str::contains("run `persona use work` again"));
    assert_eq!(sandbox.store().active_profile, "work");
}

#[cfg(unix)]
#[test]
fn failing_git_reports_key() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox
        .new_cmd_with_git("use", "false")
        .args(["work", "--global"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to set global git config user.name"))
        .stderr(predicate::str::contains("persona use work --global"));
}

#[test]
fn empty_store_hints_at_add() {
    TestEnv::default()
        .new_cmd("use")
        .arg("work")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run `persona add` first."));
}

#[cfg(unix)]
fn logging_git(sandbox: &TestEnv) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let git = sandbox.dir().join("fake-git");
    let log = sandbox.dir().join("git.log");
    std::fs::write(
        &git,
        format!("#!/bin/sh\necho \"$*\" >> '{}'\n", log.display()),
    )
    .unwrap();
    std::fs::set_permissions(&git, std::fs::Permissions::from_mode(0o755)).unwrap();
    git
}

#[cfg(unix)]
#[test]
fn switching_to_profile_without_key_unsets_signing_key() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example").with_signing_key("WORKKEY"));
    sandbox.add(&Profile::new("home", "Jane", "jane@home.example"));
    let git = logging_git(&sandbox);
    for name in ["work", "home"] {
        sandbox
            .new_cmd_with_git("use", &git)
            .args([name, "-g"])
            .assert()
            .success();
    }

    let log = std::fs::read_to_string(sandbox.dir().join("git.log")).unwrap();
    assert_eq!(
        log.lines().collect::<Vec<_>>(),
        [
            "config --global user.name Jane",
            "config --global user.email jane@corp.example",
            "config --global user.signingkey WORKKEY",
            "config --global user.name Jane",
            "config --global user.email jane@home.example",
            "config --global --unset user.signingkey",
        ]
    );
}
