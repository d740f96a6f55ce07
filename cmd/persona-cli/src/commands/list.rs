use std::fmt::Write;

use crate::{
    commands::global,
    config::{locator, store::ProfilesConfig},
    print::Print,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] locator::Error),
}

#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Only print profile names, one per line
    #[arg(long)]
    pub names_only: bool,
}

impl Cmd {
    pub fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);
        let state = global_args.locator.read_profiles()?;
        if state.is_empty() {
            print.warnln("No profiles found. Run `persona add` to create one.");
            return Ok(());
        }
        if self.names_only {
            println!("{}", state.names().join("\n"));
        } else {
            print!("{}", render(&state));
        }
        Ok(())
    }
}

/// Long listing of every profile, in store order.
pub fn render(state: &ProfilesConfig) -> String {
    let mut out = String::from("📋 Available Profiles:\n\n");
    for (i, profile) in state.profiles.iter().enumerate() {
        let marker = if state.is_active(&profile.name) {
            " ✅ (active)"
        } else {
            ""
        };
        let _ = writeln!(out, "{}. {}{marker}", i + 1, profile.name);
        let _ = writeln!(out, "   User: {}", profile.user);
        let _ = writeln!(out, "   Email: {}", profile.email);
        if profile.has_signing_key() {
            let _ = writeln!(out, "   Signing Key: {}", profile.signing_key);
        }
        if profile.has_description() {
            let _ = writeln!(out, "   Description: {}", profile.description);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "Total: {} profile(s)", state.profiles.len());
    out
}
