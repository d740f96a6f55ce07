use crate::{
    commands::global,
    config::{locator, store},
    git::{self, Scope},
    print::Print,
    tui::{self, Theme},
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] locator::Error),
    #[error(transparent)]
    Store(#[from] store::Error),
    #[error(transparent)]
    Tui(#[from] tui::Error),
    #[error(
        "{source}\nProfile '{name}' is now active but was not applied to git. \
         Fix the problem and run `persona use {name}{}` again, or set user.name \
         and user.email with `git config` yourself.",
        retry_flag(.scope)
    )]
    Apply {
        name: String,
        scope: Scope,
        source: git::Error,
    },
}

fn retry_flag(scope: &Scope) -> &'static str {
    match scope {
        Scope::Global => " --global",
        Scope::Local => "",
    }
}

#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Profile to switch to. Opens the selector when omitted
    pub name: Option<String>,

    /// Apply to the global git config instead of the current repository
    #[arg(long, short = 'g')]
    pub global: bool,

    #[command(flatten)]
    pub git: git::Args,
}

impl Cmd {
    pub fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);
        let mut state = global_args.locator.read_profiles()?;
        if state.is_empty() {
            return Err(store::Error::NoProfiles.into());
        }

        let name = match &self.name {
            Some(name) => name.clone(),
            None => {
                let Some(profile) =
                    tui::select(&state.profiles, state.active_name(), &Theme::from_env())?
                else {
                    return Ok(());
                };
                profile.name
            }
        };

        let profile = state.set_active(&name)?.clone();
        global_args.locator.write_profiles(&state)?;

        let scope = Scope::from_global(self.global);
        self.git
            .apply(&profile, scope)
            .map_err(|source| Error::Apply {
                name: name.clone(),
                scope,
                source,
            })?;

        print.checkln(format!("Switched to profile: {name} ({})", scope.adverb()));
        Ok(())
    }
}
