use clap::Parser;
use std::fmt::Debug;

const GIT_REVISION: &str = env!("GIT_REVISION");

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd;

impl Cmd {
    #[allow(clippy::unused_self)]
    pub fn run(&self) {
        println!("persona {}", long());
    }
}

pub fn pkg() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn git() -> &'static str {
    GIT_REVISION
}

pub fn long() -> String {
    if git().is_empty() {
        pkg().to_string()
    } else {
        format!("{} ({})", pkg(), git())
    }
}
