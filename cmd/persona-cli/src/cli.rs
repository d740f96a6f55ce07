use clap::CommandFactory;
use dotenvy::dotenv;
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands;
use crate::print::Print;
use crate::Root;

pub fn main() {
    let _ = dotenv().unwrap_or_default();

    let root = Root::new().unwrap_or_else(|e| match e {
        commands::Error::Clap(e) => {
            let mut cmd = Root::command();
            e.format(&mut cmd).exit();
        }
        e => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    });

    // Now use root to setup the logger
    if let Some(level) = root.global_args.log_level() {
        let mut e_filter = EnvFilter::from_default_env();
        let directives = std::iter::once(format!("persona_cli={level}"))
            .chain(root.global_args.filter_logs.iter().cloned());
        for filter in directives {
            match filter.parse() {
                Ok(directive) => e_filter = e_filter.add_directive(directive),
                Err(e) => {
                    eprintln!("{e}: {filter}");
                    std::process::exit(1);
                }
            }
        }

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(e_filter)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set the global tracing subscriber: {e}");
        }
    }

    let printer = Print::new(root.global_args.quiet);
    if let Err(e) = root.run() {
        printer.errorln(format!("error: {e}"));
        std::process::exit(1);
    }
}
