use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::selector::Selector;

pub const KEY_HINTS: &str =
    "Use ↑/↓ to navigate, Enter to select, type to filter, Esc to quit.";

/// Styles and markers used to draw the selector.
#[derive(Clone, Debug)]
pub struct Theme {
    pub header: Style,
    pub active: Style,
    pub focused: Style,
    pub preview: Style,
    pub hints: Style,
    pub cursor_marker: &'static str,
    pub active_marker: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header: Style::default().fg(Color::Indexed(63)),
            active: Style::default().fg(Color::Indexed(10)),
            focused: Style::default().fg(Color::Indexed(12)),
            preview: Style::default().fg(Color::Indexed(240)),
            hints: Style::default().fg(Color::Indexed(63)),
            cursor_marker: "➜ ",
            active_marker: "✅",
        }
    }
}

impl Theme {
    /// [`Theme::plain`] when `NO_COLOR` is set, the default theme otherwise.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            Theme::plain()
        } else {
            Theme::default()
        }
    }

    /// No colors, ASCII markers.
    pub fn plain() -> Self {
        Theme {
            header: Style::default(),
            active: Style::default(),
            focused: Style::default(),
            preview: Style::default(),
            hints: Style::default(),
            cursor_marker: "> ",
            active_marker: "*",
        }
    }
}

pub fn header(selector: &Selector, theme: &Theme) -> Line<'static> {
    Line::styled(format!("Search: {}", selector.filter()), theme.header)
}

/// One line per visible profile, plus the preview lines under the cursor row.
pub fn rows(selector: &Selector, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![];
    for (i, profile) in selector.filtered().into_iter().enumerate() {
        let is_cursor = i == selector.cursor();
        let is_active = selector.is_active(profile);
        let cursor = if is_cursor { theme.cursor_marker } else { "  " };
        let marker = if is_active { theme.active_marker } else { "" };
        let text = format!("{cursor}[{marker}] {}: {}", profile.name, profile.user);
        if !is_cursor {
            lines.push(Line::raw(text));
            continue;
        }
        let style = if is_active { theme.active } else { theme.focused };
        lines.push(Line::styled(text, style));
        lines.push(Line::from(Span::styled(
            format!("    Email: {}", profile.email),
            theme.preview,
        )));
        lines.push(Line::from(Span::styled(
            format!("    Description: {}", profile.description),
            theme.preview,
        )));
    }
    lines
}

/// Lines drawn under the cursor row.
const PREVIEW_LINES: usize = 2;

/// First body line to draw so the cursor row and its preview fit in `height`.
///
/// Rows above the cursor take one line each, so the cursor row sits at line
/// `cursor`. The cursor row itself is never scrolled out.
pub fn scroll_offset(cursor: usize, height: u16) -> u16 {
    let offset = (cursor + 1 + PREVIEW_LINES)
        .saturating_sub(usize::from(height))
        .min(cursor);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

pub fn render(frame: &mut Frame, selector: &Selector, theme: &Theme) {
    let [top, body, bottom] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    frame.render_widget(Paragraph::new(header(selector, theme)), top);
    let offset = scroll_offset(selector.cursor(), body.height);
    frame.render_widget(
        Paragraph::new(rows(selector, theme)).scroll((offset, 0)),
        body,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(KEY_HINTS, theme.hints)),
        bottom,
    );
}
