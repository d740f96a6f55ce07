use std::io::{BufRead, Write};

use crate::{
    commands::global,
    config::{
        locator,
        store::{self, ProfilesConfig},
        Profile,
    },
    print::Print,
    prompt::{self, Prompt},
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] locator::Error),
    #[error(transparent)]
    Store(#[from] store::Error),
    #[error(transparent)]
    Prompt(#[from] prompt::Error),
}

/// Profile fields that can be given on the command line instead of prompted for.
#[derive(Debug, clap::Args, Clone, Default)]
#[group(skip)]
pub struct ProfileArgs {
    /// Git user name (`user.name`)
    #[arg(long)]
    pub user: Option<String>,

    /// Git email (`user.email`)
    #[arg(long)]
    pub email: Option<String>,

    /// Key used to sign commits (`user.signingkey`)
    #[arg(long)]
    pub signing_key: Option<String>,

    /// Free-form note shown in the selector preview
    #[arg(long)]
    pub description: Option<String>,
}

impl ProfileArgs {
    pub fn is_empty(&self) -> bool {
        self.user.is_none()
            && self.email.is_none()
            && self.signing_key.is_none()
            && self.description.is_none()
    }

    /// Builds a new profile, prompting for missing required fields.
    ///
    /// Optional fields are only prompted for when a required one was.
    pub fn to_profile<R: BufRead, W: Write>(
        &self,
        name: &str,
        prompt: &mut Prompt<R, W>,
    ) -> Result<Profile, Error> {
        let interactive = self.user.is_none() || self.email.is_none();

        let user = given_or(self.user.as_deref(), prompt, "Git user name")?;
        if user.is_empty() {
            return Err(store::Error::EmptyField("user").into());
        }
        let email = given_or(self.email.as_deref(), prompt, "Git email")?;
        if email.is_empty() {
            return Err(store::Error::EmptyField("email").into());
        }
        let (signing_key, description) = if interactive {
            (
                given_or(self.signing_key.as_deref(), prompt, "Signing key (optional)")?,
                given_or(self.description.as_deref(), prompt, "Description (optional)")?,
            )
        } else {
            (
                self.signing_key.clone().unwrap_or_default(),
                self.description.clone().unwrap_or_default(),
            )
        };

        Ok(Profile::new(name, user, email)
            .with_signing_key(signing_key)
            .with_description(description))
    }
}

fn given_or<R: BufRead, W: Write>(
    given: Option<&str>,
    prompt: &mut Prompt<R, W>,
    label: &str,
) -> Result<String, prompt::Error> {
    match given {
        Some(value) => Ok(value.trim().to_string()),
        None => prompt.text(label),
    }
}

#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Name of the profile, e.g. "work". Prompted for when omitted
    pub name: Option<String>,

    #[command(flatten)]
    pub fields: ProfileArgs,
}

impl Cmd {
    pub fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);
        let mut state = global_args.locator.read_profiles()?;
        let mut prompt = Prompt::stdio();

        let profile = self.profile(&state, &mut prompt)?;
        let name = profile.name.clone();
        state.add(profile)?;
        let path = global_args.locator.write_profiles(&state)?;

        print.checkln(format!("Profile '{name}' added to {path:?}"));
        Ok(())
    }

    /// The profile to add, validated against `state` before any field is prompted for.
    pub fn profile<R: BufRead, W: Write>(
        &self,
        state: &ProfilesConfig,
        prompt: &mut Prompt<R, W>,
    ) -> Result<Profile, Error> {
        let name = given_or(self.name.as_deref(), prompt, "Profile name")?;
        if name.is_empty() {
            return Err(store::Error::EmptyField("name").into());
        }
        if state.get(&name).is_some() {
            return Err(store::Error::AlreadyExists(name).into());
        }
        self.fields.to_profile(&name, prompt)
    }
}
