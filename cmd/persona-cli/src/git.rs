use std::{
    ffi::OsString,
    fmt::Display,
    io,
    path::PathBuf,
    process::Command,
};

use itertools::Itertools;

use crate::config::Profile;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to run {bin:?}: {error}")]
    Spawn { bin: PathBuf, error: io::Error },
    #[error("failed to set {scope} git config {key}: {stderr}")]
    Config {
        scope: Scope,
        key: &'static str,
        stderr: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Global,
    Local,
}

impl Scope {
    pub fn from_global(global: bool) -> Self {
        if global {
            Scope::Global
        } else {
            Scope::Local
        }
    }

    pub fn adverb(self) -> &'static str {
        match self {
            Scope::Global => "globally",
            Scope::Local => "locally",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Scope::Global => "global",
                Scope::Local => "local",
            }
        )
    }
}

#[derive(Debug, clap::Args, Clone)]
#[group(skip)]
pub struct Args {
    /// git executable used to apply identities
    #[arg(long, env = "PERSONA_GIT_BIN", default_value = "git")]
    pub git_bin: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            git_bin: PathBuf::from("git"),
        }
    }
}

/// The `git config` entries a profile sets, in the order they are applied.
///
/// `None` unsets the key, so a profile without a signing key does not keep
/// the previous profile's.
pub fn identity_entries(profile: &Profile) -> Vec<(&'static str, Option<&str>)> {
    vec![
        ("user.name", Some(profile.user.as_str())),
        ("user.email", Some(profile.email.as_str())),
        (
            "user.signingkey",
            Some(profile.signing_key.as_str()).filter(|_| profile.has_signing_key()),
        ),
    ]
}

pub fn config_args(scope: Scope, key: &str, value: Option<&str>) -> Vec<OsString> {
    let mut args = vec![OsString::from("config")];
    if scope == Scope::Global {
        args.push("--global".into());
    }
    match value {
        Some(value) => {
            args.push(key.into());
            args.push(value.into());
        }
        None => {
            args.push("--unset".into());
            args.push(key.into());
        }
    }
    args
}

// `git config --unset` exits with 5 when the key was not set.
const UNSET_MISSING_KEY: i32 = 5;

impl Args {
    /// Sets the profile's identity in git's configuration at `scope`.
    ///
    /// Stops at the first failing `git config` call.
    pub fn apply(&self, profile: &Profile, scope: Scope) -> Result<(), Error> {
        for (key, value) in identity_entries(profile) {
            self.set(scope, key, value)?;
        }
        Ok(())
    }

    fn set(&self, scope: Scope, key: &'static str, value: Option<&str>) -> Result<(), Error> {
        let args = config_args(scope, key, value);
        tracing::debug!(
            "{} {}",
            self.git_bin.display(),
            args.iter().map(|a| a.to_string_lossy()).join(" ")
        );
        let output = Command::new(&self.git_bin)
            .args(&args)
            .output()
            .map_err(|error| Error::Spawn {
                bin: self.git_bin.clone(),
                error,
            })?;
        if output.status.success()
            || (value.is_none() && output.status.code() == Some(UNSET_MISSING_KEY))
        {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(Error::Config {
            scope,
            key,
            stderr: if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            },
        })
    }
}
