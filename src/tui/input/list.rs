use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::session::UiEvent;
use crate::tui::app::{App, Focus};

use super::*;

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => {
            if app.list_cursor == 0 {
                app.focus = Focus::Form;
            } else {
                move_cursor(app, -1);
            }
        }
        KeyCode::Char('g') | KeyCode::Home => app.list_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.list_cursor = app.todo_count().saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char('l') | KeyCode::Right => {
            open_options(app);
        }
        KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Char('w') => {
            app.focus = Focus::Form;
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let count = app.todo_count();
    if count == 0 {
        return;
    }
    let next = app.list_cursor.saturating_add_signed(delta);
    app.list_cursor = next.min(count - 1);
}

/// Open the options drawer for the record under the cursor
pub(super) fn open_options(app: &mut App) {
    if let Some(id) = app.cursor_record().map(|r| r.id) {
        send(app, UiEvent::OpenOptionsFor(id));
    }
}
