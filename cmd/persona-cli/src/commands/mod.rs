use std::str::FromStr;

use clap::{CommandFactory, FromArgMatches, Parser};

pub mod add;
pub mod completion;
pub mod current;
pub mod delete;
pub mod edit;
pub mod global;
pub mod list;
pub mod use_profile;
pub mod version;

pub const HEADING_GLOBAL: &str = "Options (Global)";

const ABOUT: &str = "Keep several git identities around and switch between them.";

// long_about is shown when someone uses `--help`; short help when using `-h`
const LONG_ABOUT: &str = "

A profile bundles a git user name, email, optional signing key and a \
description under a short name. Switching profiles writes the identity into \
git's configuration, either for the current repository or globally with \
`--global`.

Commands that need a profile open an interactive selector when no name is \
given: type to filter by name, user or email, move with the arrow keys, \
confirm with Enter and quit with Esc.

Profiles live in `$XDG_CONFIG_HOME/persona/config.toml` \
(`~/.config/persona/config.toml` by default).

    persona add work --user \"Jane Doe\" --email jane@corp.example
    persona use work --global
    persona list";

#[derive(Parser, Debug)]
#[command(
    name = "persona",
    about = ABOUT,
    version = version::long(),
    long_about = ABOUT.to_string() + LONG_ABOUT,
    disable_help_subcommand = true,
)]
pub struct Root {
    #[clap(flatten)]
    pub global_args: global::Args,

    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Root {
    pub fn new() -> Result<Self, Error> {
        Self::try_parse().map_err(Error::Clap)
    }

    pub fn from_arg_matches<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_arg_matches_mut(&mut Self::command().try_get_matches_from(itr)?)
    }

    pub fn run(&self) -> Result<(), Error> {
        match &self.cmd {
            Cmd::Add(add) => add.run(&self.global_args)?,
            Cmd::Edit(edit) => edit.run(&self.global_args)?,
            Cmd::Delete(delete) => delete.run(&self.global_args)?,
            Cmd::List(list) => list.run(&self.global_args)?,
            Cmd::Use(use_profile) => use_profile.run(&self.global_args)?,
            Cmd::Current(current) => current.run(&self.global_args)?,
            Cmd::Version(version) => version.run(),
            Cmd::Completion(completion) => completion.run(),
        };
        Ok(())
    }
}

impl FromStr for Root {
    type Err = clap::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_arg_matches(std::iter::once("persona").chain(s.split_whitespace()))
    }
}

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Add a new profile
    Add(add::Cmd),
    /// Edit an existing profile
    Edit(edit::Cmd),
    /// Delete a profile. The active profile cannot be deleted
    #[command(visible_alias = "rm")]
    Delete(delete::Cmd),
    /// List all profiles
    #[command(visible_alias = "ls")]
    List(list::Cmd),
    /// Make a profile active and apply it to git
    Use(use_profile::Cmd),
    /// Print the name of the active profile
    Current(current::Cmd),
    /// Print version information
    Version(version::Cmd),
    /// Print shell completion code for the specified shell.
    #[command(long_about = completion::LONG_ABOUT)]
    Completion(completion::Cmd),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Add(#[from] add::Error),
    #[error(transparent)]
    Edit(#[from] edit::Error),
    #[error(transparent)]
    Delete(#[from] delete::Error),
    #[error(transparent)]
    List(#[from] list::Error),
    #[error(transparent)]
    Use(#[from] use_profile::Error),
    #[error(transparent)]
    Current(#[from] current::Error),
    #[error(transparent)]
    Clap(#[from] clap::Error),
}
