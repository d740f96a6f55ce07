use crate::{
    commands::global,
    config::{locator, store, store::ProfilesConfig, Profile},
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
    #[error(
        "No profiles available to delete. '{0}' is active; switch to another profile first."
    )]
    NothingDeletable(String),
}

#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Profile to delete. Opens the selector when omitted
    pub name: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

impl Cmd {
    pub fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);
        let mut state = global_args.locator.read_profiles()?;

        let Some(target) = self.target(&state)? else {
            return Ok(());
        };

        if !self.force {
            let question = format!("Delete profile '{}'?", target.name);
            if !Prompt::stdio().confirm(&question)? {
                print.infoln("Deletion cancelled.");
                return Ok(());
            }
        }

        state.delete(&target.name)?;
        global_args.locator.write_profiles(&state)?;

        print.checkln(format!("Profile '{}' deleted", target.name));
        Ok(())
    }

    /// The profile to delete, or `None` when the selector was cancelled.
    fn target(&self, state: &ProfilesConfig) -> Result<Option<Profile>, Error> {
        if let Some(name) = &self.name {
            return Ok(Some(check_deletable(state, name)?.clone()));
        }
        let deletable = state.deletable();
        if deletable.is_empty() {
            return Err(nothing_deletable(state));
        }
        Ok(tui::select(&deletable, "", &Theme::from_env())?)
    }
}

/// Looks up `name`, refusing the active profile before anything is prompted.
pub fn check_deletable<'a>(state: &'a ProfilesConfig, name: &str) -> Result<&'a Profile, Error> {
    if state.is_empty() {
        return Err(store::Error::NoProfiles.into());
    }
    let Some(profile) = state.get(name) else {
        return Err(store::Error::NotFound {
            name: name.to_string(),
            available: state.deletable().into_iter().map(|p| p.name).collect(),
        }
        .into());
    };
    if state.is_active(name) {
        return Err(store::Error::DeleteActive(name.to_string()).into());
    }
    Ok(profile)
}

fn nothing_deletable(state: &ProfilesConfig) -> Error {
    if state.is_empty() {
        store::Error::NoProfiles.into()
    } else {
        Error::NothingDeletable(state.active_profile.clone())
    }
}
