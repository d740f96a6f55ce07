use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Profile;

/// Keys the selector reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Cancel,
    Up,
    Down,
    Confirm,
    Char(char),
    Erase,
    Other,
}

impl From<KeyEvent> for Key {
    fn from(key: KeyEvent) -> Self {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => Key::Cancel,
            KeyCode::Char('c') if control => Key::Cancel,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Enter => Key::Confirm,
            KeyCode::Backspace | KeyCode::Delete => Key::Erase,
            KeyCode::Char(c) if !control && !alt && !c.is_control() => Key::Char(c),
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
}

/// State of one interactive selection over a fixed list of profiles.
///
/// The filtered view is recomputed from the full list on every call; the
/// lists involved are a handful of entries.
#[derive(Debug)]
pub struct Selector<'a> {
    profiles: &'a [Profile],
    active: &'a str,
    filter: String,
    cursor: usize,
    selected: Option<usize>,
}

impl<'a> Selector<'a> {
    pub fn new(profiles: &'a [Profile], active: &'a str) -> Self {
        Selector {
            profiles,
            active,
            filter: String::new(),
            cursor: 0,
            selected: None,
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_active(&self, profile: &Profile) -> bool {
        !self.active.is_empty() && profile.name == self.active
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        let needle = self.filter.to_lowercase();
        [&profile.name, &profile.user, &profile.email]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching profiles in display order: the active profile first, then
    /// the rest in their original order.
    pub fn filtered(&self) -> Vec<&'a Profile> {
        let profiles = self.profiles;
        let active = profiles
            .iter()
            .find(|p| self.is_active(p))
            .filter(|p| self.matches(p));
        active
            .into_iter()
            .chain(
                profiles
                    .iter()
                    .filter(|p| !self.is_active(p) && self.matches(p)),
            )
            .collect()
    }

    /// Profile under the cursor.
    pub fn highlighted(&self) -> Option<&'a Profile> {
        self.filtered().get(self.cursor).copied()
    }

    /// Index into the original list of the confirmed profile.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&'a Profile> {
        self.selected.map(|i| &self.profiles[i])
    }

    pub fn handle(&mut self, key: Key) -> Step {
        match key {
            Key::Cancel => {
                self.selected = None;
                return Step::Done;
            }
            Key::Up => self.cursor = self.cursor.saturating_sub(1),
            Key::Down => {
                let len = self.filtered().len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            Key::Confirm => {
                self.selected = self.highlighted().and_then(|p| self.original_index(p));
                return Step::Done;
            }
            Key::Char(c) => {
                self.filter.push(c);
                self.cursor = 0;
            }
            Key::Erase => {
                if self.filter.pop().is_some() {
                    self.cursor = 0;
                }
            }
            Key::Other => {}
        }
        Step::Continue
    }

    fn original_index(&self, profile: &Profile) -> Option<usize> {
        self.profiles.iter().position(|p| p.name == profile.name)
    }
}
