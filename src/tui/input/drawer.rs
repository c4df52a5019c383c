use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::session::UiEvent;
use crate::tui::app::{App, DrawerEdit, StatusKind};
use crate::tui::input_buffer::InputBuffer;

use super::*;

/// Keys while the options drawer is open and not editing
pub(super) fn handle_drawer(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('e') | KeyCode::Enter => start_edit(app),
        KeyCode::Char('d') | KeyCode::Delete => delete_target(app),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') | KeyCode::Left => {
            send(app, UiEvent::CloseOptions);
        }
        _ => {}
    }
}

/// Keys while editing a record inside the drawer
pub(super) fn handle_drawer_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter if !is_newline_chord(&key) => confirm_edit(app),
        KeyCode::Esc => app.drawer_edit = None,
        _ => {
            if let Some(edit) = &mut app.drawer_edit {
                apply_edit_key(&mut edit.buffer, key);
            }
        }
    }
}

fn start_edit(app: &mut App) {
    match app.session.drawer_record() {
        Some(record) => {
            app.drawer_edit = Some(DrawerEdit {
                id: record.id,
                buffer: InputBuffer::from_text(&record.content),
            });
        }
        // Target no longer exists; nothing to edit
        None => {
            send(app, UiEvent::CloseOptions);
        }
    }
}

fn confirm_edit(app: &mut App) {
    let Some(edit) = app.drawer_edit.take() else {
        return;
    };
    let id = edit.id;
    if send(app, UiEvent::RequestModify(id, edit.buffer.text().to_string())) {
        send(app, UiEvent::CloseOptions);
        app.set_status(StatusKind::Info, format!("Saved to-do #{id}"));
    } else {
        app.drawer_edit = Some(edit);
    }
}

fn delete_target(app: &mut App) {
    let Some(id) = app.session.drawer().target() else {
        return;
    };
    send(app, UiEvent::RequestRemove(id));
    // Removal closes the drawer for its own target; close anyway for dangling ids
    send(app, UiEvent::CloseOptions);
    app.clamp_cursor();
    app.set_status(StatusKind::Info, format!("Deleted to-do #{id}"));
}
