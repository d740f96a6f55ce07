use persona_cli::config::Profile;
use persona_test::{AssertExt, TestEnv};
use predicates::prelude::predicate;

#[test]
fn lists_profiles_with_active_marker() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane Doe", "jane@corp.example").with_signing_key("ABCD"));
    sandbox.add(&Profile::new("home", "Jane", "jane@home.example"));
    sandbox.use_profile("home");

    let out = sandbox.new_cmd("list").assert().success().stdout_as_str();
    assert!(out.starts_with("📋 Available Profiles:"), "{out}");
    assert!(out.contains("1. work\n   User: Jane Doe"), "{out}");
    assert!(out.contains("   Signing Key: ABCD"), "{out}");
    assert!(out.contains("2. home ✅ (active)"), "{out}");
    assert!(out.ends_with("Total: 2 profile(s)"), "{out}");
}

#[test]
fn names_only() {
    let sandbox = TestEnv::default();
    sandbox.add(&Profile::new("work", "Jane", "jane@corp.example"));
    sandbox.add(&Profile::new("home", "Jane", "jane@home.example"));
    sandbox
        .new_cmd("ls")
        .arg("--names-only")
        .assert()
        .success()
        .stdout("work\nhome\n");
}

#[test]
fn empty_store_warns() {
    TestEnv::default()
        .new_cmd("list")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No profiles found"));
}
