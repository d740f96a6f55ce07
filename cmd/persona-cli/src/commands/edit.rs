use std::io::{BufRead, Write};

use crate::{
    commands::{add::ProfileArgs, global},
    config::{locator, store, Profile},
    print::Print,
    prompt::{self, Prompt},
    tui::{self, Theme},
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] locator::Error),
    #[error(transparent)]
    Store(#[from] store::Error),
    #[error(transparent)]
    Prompt(#[from] prompt::Error),
    #[error(transparent)]
    Tui(#[from] tui::Error),
}

#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Profile to edit. Opens the selector when omitted
    pub name: Option<String>,

    /// Rename the profile
    #[arg(long = "name")]
    pub new_name: Option<String>,

    #[command(flatten)]
    pub fields: ProfileArgs,
}

impl Cmd {
    pub fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);
        let mut state = global_args.locator.read_profiles()?;
        if state.is_empty() {
            return Err(store::Error::NoProfiles.into());
        }

        let target = if let Some(name) = &self.name {
            state.find(name)?.clone()
        } else {
            let Some(profile) =
                tui::select(&state.profiles, state.active_name(), &Theme::from_env())?
            else {
                return Ok(());
            };
            profile
        };

        let edited = if self.is_interactive() {
            print.editln(format!("Editing profile: {}", target.name));
            print.println("Press Enter to keep the current value, or type a new one");
            self.prompt_fields(&target, &mut Prompt::stdio())?
        } else {
            self.apply_flags(&target)
        };

        state.edit(&target.name, edited.clone())?;
        global_args.locator.write_profiles(&state)?;

        print.checkln(format!("Profile '{}' updated", edited.name));
        Ok(())
    }

    /// No field flags given: every field is prompted for.
    pub fn is_interactive(&self) -> bool {
        self.new_name.is_none() && self.fields.is_empty()
    }

    pub fn apply_flags(&self, target: &Profile) -> Profile {
        let pick = |given: &Option<String>, current: &String| {
            given
                .as_deref()
                .map_or_else(|| current.clone(), |v| v.trim().to_string())
        };
        Profile {
            name: pick(&self.new_name, &target.name),
            user: pick(&self.fields.user, &target.user),
            email: pick(&self.fields.email, &target.email),
            signing_key: pick(&self.fields.signing_key, &target.signing_key),
            description: pick(&self.fields.description, &target.description),
        }
    }

    pub fn prompt_fields<R: BufRead, W: Write>(
        &self,
        target: &Profile,
        prompt: &mut Prompt<R, W>,
    ) -> Result<Profile, Error> {
        let name = prompt.edit("Profile name", &target.name)?;
        let user = prompt.edit("Git user name", &target.user)?;
        let email = prompt.edit("Git email", &target.email)?;
        let signing_key = prompt.edit("Signing key", &target.signing_key)?;
        let description = prompt.edit("Description", &target.description)?;
        Ok(Profile::new(name, user, email)
            .with_signing_key(signing_key)
            .with_description(description))
    }
}
