//! Interactive profile selector.
//!
//! [`selector::Selector`] holds the state machine; [`view`] draws it. [`select`]
//! wires both to a real terminal.
use std::io::{self, Stderr};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Profile;

pub mod selector;
pub mod view;

pub use selector::{Key, Selector, Step};
pub use view::Theme;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Raw mode plus alternate screen, undone on drop.
struct Session {
    terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl Session {
    fn enter() -> Result<Self, Error> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        if let Err(e) = execute!(stderr, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stderr)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = execute!(io::stderr(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };
        Ok(Session { terminal })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the selector until the user confirms or cancels.
///
/// Returns `None` when cancelled, or when confirming over an empty view.
pub fn select(
    profiles: &[Profile],
    active: &str,
    theme: &Theme,
) -> Result<Option<Profile>, Error> {
    let mut selector = Selector::new(profiles, active);
    {
        let mut session = Session::enter()?;
        loop {
            session
                .terminal
                .draw(|frame| view::render(frame, &selector, theme))?;
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if selector.handle(Key::from(key)) == Step::Done {
                break;
            }
        }
    }
    let selected = selector.selected().cloned();
    tracing::debug!(
        "selector finished with {:?}",
        selected.as_ref().map(|p| &p.name)
    );
    Ok(selected)
}
