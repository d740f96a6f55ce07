use std::{env, fmt::Display};

const TERMS: &[&str] = &["Apple_Terminal", "vscode"];

#[derive(Clone)]
pub struct Print {
    pub quiet: bool,
}

impl Print {
    pub fn new(quiet: bool) -> Print {
        Print { quiet }
    }

    pub fn println<T: Display + Sized>(&self, message: T) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    // Some terminals like vscode's and macOS' default terminal will not render
    // the subsequent space if the emoji codepoints size is 2; in this case,
    // we need an additional space.
    pub fn compute_emoji<T: Display + Sized>(&self, emoji: T) -> String {
        if let Ok(term_program) = env::var("TERM_PROGRAM") {
            if TERMS.contains(&term_program.as_str()) && emoji.to_string().chars().count() == 2 {
                return format!("{emoji} ");
            }
        }

        emoji.to_string()
    }

    /// `message` prefixed with `icon`, as printed by the `*ln` helpers.
    pub fn line<T: Display + Sized>(&self, icon: &str, message: T) -> String {
        format!("{} {message}", self.compute_emoji(icon))
    }
}

macro_rules! create_print_functions {
    ($nameln:ident, $icon:expr) => {
        impl Print {
            pub fn $nameln<T: Display + Sized>(&self, message: T) {
                if !self.quiet {
                    eprintln!("{}", self.line($icon, message));
                }
            }
        }
    };
}

create_print_functions!(checkln, "✅");
create_print_functions!(errorln, "❌");
create_print_functions!(infoln, "ℹ️");
create_print_functions!(warnln, "⚠️");
create_print_functions!(editln, "📝");
