#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_panics_doc
)]

mod cli;
pub use cli::main;

pub mod commands;
pub mod config;
pub mod git;
pub mod print;
pub mod prompt;
pub mod tui;

pub use commands::Root;
