use crate::{
    commands::global,
    config::{locator, store::ProfilesConfig},
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] locator::Error),
    #[error("No active profile. Run `persona use <name>` to pick one.")]
    NoActive,
    #[error("Active profile '{0}' no longer exists. Run `persona use <name>` to pick another.")]
    Dangling(String),
}

#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd;

impl Cmd {
    #[allow(clippy::unused_self)]
    pub fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let state = global_args.locator.read_profiles()?;
        println!("{}", active(&state)?);
        Ok(())
    }
}

pub fn active(state: &ProfilesConfig) -> Result<&str, Error> {
    if let Some(name) = state.dangling_active() {
        return Err(Error::Dangling(name.to_string()));
    }
    state
        .active()
        .map(|p| p.name.as_str())
        .ok_or(Error::NoActive)
}
