#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_panics_doc
)]
use std::{ffi::OsStr, path::PathBuf};

use assert_cmd::{assert::Assert, Command};
use assert_fs::{fixture::FixtureError, TempDir};

use persona_cli::config::{locator::CONFIG_FILE_NAME, store::ProfilesConfig, Profile};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to create temporary directory")]
    TempDir(FixtureError),
}

/// A `TestEnv` is a contained process for a specific test, with its own ENV and
/// its own `TempDir` holding the profile store.
pub struct TestEnv {
    pub temp_dir: TempDir,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new().unwrap()
    }
}

impl TestEnv {
    pub fn new() -> Result<TestEnv, Error> {
        TempDir::new()
            .map_err(Error::TempDir)
            .map(|temp_dir| TestEnv { temp_dir })
    }

    /// `persona <name>` running inside the temp dir, with `git` replaced by `true`
    /// so nothing touches the real git configuration.
    pub fn new_cmd(&self, name: &str) -> Command {
        self.new_cmd_with_git(name, "true")
    }

    pub fn new_cmd_with_git(&self, name: &str, git_bin: impl AsRef<OsStr>) -> Command {
        let mut this = Command::cargo_bin("persona").unwrap_or_else(|_| Command::new("persona"));
        this.arg(name);
        this.current_dir(&self.temp_dir);
        this.env_remove("PERSONA_CONFIG_FILE");
        this.env_remove("XDG_CONFIG_HOME");
        this.env_remove("RUST_LOG");
        this.env("PERSONA_CONFIG_HOME", self.dir().path());
        this.env("PERSONA_GIT_BIN", git_bin);
        this.env("NO_COLOR", "1");
        this
    }

    pub fn dir(&self) -> &TempDir {
        &self.temp_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir().join(CONFIG_FILE_NAME)
    }

    /// Current contents of the profile store, empty when it was never written.
    pub fn store(&self) -> ProfilesConfig {
        ProfilesConfig::read(&self.config_file()).unwrap()
    }

    /// Adds a profile without prompting.
    pub fn add(&self, profile: &Profile) {
        let mut cmd = self.new_cmd("add");
        cmd.arg(&profile.name)
            .args(["--user", &profile.user])
            .args(["--email", &profile.email]);
        if profile.has_signing_key() {
            cmd.args(["--signing-key", &profile.signing_key]);
        }
        if profile.has_description() {
            cmd.args(["--description", &profile.description]);
        }
        cmd.assert().success();
    }

    pub fn use_profile(&self, name: &str) {
        self.new_cmd("use").arg(name).assert().success();
    }
}

pub trait AssertExt {
    fn stdout_as_str(&self) -> String;
}

impl AssertExt for Assert {
    fn stdout_as_str(&self) -> String {
        String::from_utf8(self.get_output().stdout.clone())
            .expect("failed to make str")
            .trim()
            .to_owned()
    }
}
