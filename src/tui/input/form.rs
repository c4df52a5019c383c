use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::session::UiEvent;
use crate::tui::app::{App, Focus};

use super::*;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter if !is_newline_chord(&key) => submit_form(app),
        KeyCode::Tab | KeyCode::Esc => app.focus = Focus::List,
        KeyCode::Down => {
            // Past the last line of the input, fall through to the list
            if !app.form.move_down() && app.todo_count() > 0 {
                app.focus = Focus::List;
            }
        }
        _ => {
            apply_edit_key(&mut app.form, key);
        }
    }
}

/// Submit the form. Whitespace-only input is cleared and the user is
/// re-prompted; focus stays in the form either way.
pub(super) fn submit_form(app: &mut App) {
    let content = app.form.text().to_string();
    if send(app, UiEvent::SubmitNewTodo(content)) {
        app.list_cursor = 0;
        app.list_scroll = 0;
    }
    app.form.clear();
}
