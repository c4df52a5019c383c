use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::config::DEFAULT_TIMESTAMP_FORMAT;
use crate::ops::clock::FixedClock;
use crate::ops::session::{DEMO_TODOS, Session};
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 24;

/// Creation time stamped on every record built here
pub const FIXED_NOW: &str = "2025-05-14 09:30:00";

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A session whose clock is pinned to `FIXED_NOW`
pub fn fixed_session() -> Session {
    let clock = FixedClock::parse(FIXED_NOW).unwrap();
    Session::with_clock(Box::new(clock), DEFAULT_TIMESTAMP_FORMAT)
}

/// App with the given items added in order (so the last one is shown first)
pub fn app_with_todos(items: &[&str]) -> App {
    let mut session = fixed_session();
    session.seed(items.iter().copied());
    App::new(session, Theme::default())
}

pub fn empty_app() -> App {
    app_with_todos(&[])
}

/// Squats, Bench press, Deadlift/Lunge, as the demo seeds them
pub fn demo_app() -> App {
    app_with_todos(&DEMO_TODOS)
}

/// Render the whole screen
pub fn render_app(app: &mut App, w: u16, h: u16) -> String {
    render_to_string(w, h, |frame, _area| super::render(frame, app))
}
