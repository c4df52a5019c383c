mod drawer;
mod form;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::session::UiEvent;
use crate::ops::todo_ops::TodoError;

use super::app::{App, Focus, StatusKind};
use super::input_buffer::InputBuffer;

use drawer::*;
use form::*;
use list::*;

/// Shown when a submit or edit is rejected for being empty
pub const EMPTY_CONTENT_PROMPT: &str = "Write something to do first";

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    app.status = None;

    if key.code == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return;
    }
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // Drawer intercepts everything while open
    if app.drawer_edit.is_some() {
        handle_drawer_edit(app, key);
        return;
    }
    if app.drawer_open() {
        handle_drawer(app, key);
        return;
    }

    match app.focus {
        Focus::Form => handle_form(app, key),
        Focus::List => handle_list(app, key),
    }
}

/// Handle a bracketed paste event. Goes to whichever input buffer is active.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.show_help || text.is_empty() {
        return;
    }
    if let Some(edit) = &mut app.drawer_edit {
        edit.buffer.insert_str(text);
        return;
    }
    if !app.drawer_open() && app.focus == Focus::Form {
        app.form.insert_str(text);
    }
}

/// Dispatch to the session. A rejection becomes a status warning so the
/// user is re-prompted; returns whether the event was applied.
pub(super) fn send(app: &mut App, event: UiEvent) -> bool {
    match app.session.dispatch(event) {
        Ok(()) => true,
        Err(TodoError::EmptyContent) => {
            app.set_status(StatusKind::Warning, EMPTY_CONTENT_PROMPT);
            false
        }
    }
}

/// Alt+Enter / Shift+Enter insert a newline instead of submitting
pub(super) fn is_newline_chord(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter
        && key
            .modifiers
            .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT)
}

/// Apply a text-editing key to `buf`. Returns false if the key wasn't an
/// editing key (or a vertical move hit the edge).
pub(super) fn apply_edit_key(buf: &mut InputBuffer, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Enter if is_newline_chord(&key) => buf.newline(),
        KeyCode::Char('j') if ctrl => buf.newline(),
        KeyCode::Char('w') if ctrl => buf.delete_word_left(),
        KeyCode::Char('a') if ctrl => buf.move_line_start(),
        KeyCode::Char('e') if ctrl => buf.move_line_end(),
        KeyCode::Char(c) if !ctrl && !alt => buf.insert_char(c),
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Delete => buf.delete(),
        KeyCode::Left => buf.move_left(),
        KeyCode::Right => buf.move_right(),
        KeyCode::Home => buf.move_line_start(),
        KeyCode::End => buf.move_line_end(),
        KeyCode::Up => return buf.move_up(),
        KeyCode::Down => return buf.move_down(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::todo::TodoId;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn alt_enter() -> KeyEvent {
        KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn contents(app: &App) -> Vec<String> {
        app.session
            .todos()
            .iter()
            .map(|r| r.content.clone())
            .collect()
    }

    #[test]
    fn enter_submits_form() {
        let mut app = empty_app();
        type_str(&mut app, "Squats");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(contents(&app), vec!["Squats"]);
        assert!(app.form.is_empty());
        assert_eq!(app.focus, Focus::Form);
        assert_eq!(app.status, None);
    }

    #[test]
    fn blank_submit_reprompts() {
        let mut app = empty_app();
        type_str(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.todo_count(), 0);
        assert_eq!(app.focus, Focus::Form);
        assert!(app.form.is_empty());
        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Warning);
        assert_eq!(status.text, EMPTY_CONTENT_PROMPT);

        // Next key clears the message
        type_str(&mut app, "R");
        assert_eq!(app.status, None);
    }

    #[test]
    fn alt_enter_inserts_newline() {
        let mut app = empty_app();
        type_str(&mut app, "Deadlift");
        handle_key(&mut app, alt_enter());
        type_str(&mut app, "Lunge");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(contents(&app), vec!["Deadlift\nLunge"]);
    }

    #[test]
    fn ctrl_j_inserts_newline() {
        let mut app = empty_app();
        type_str(&mut app, "a");
        handle_key(&mut app, ctrl('j'));
        type_str(&mut app, "b");
        assert_eq!(app.form.text(), "a\nb");
    }

    #[test]
    fn q_is_text_in_form_but_quits_in_list() {
        let mut app = empty_app();
        type_str(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.form.text(), "q");
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::List);
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = demo_app();
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn list_navigation_and_open_drawer() {
        let mut app = demo_app();
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.list_cursor, 1);
        handle_key(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.list_cursor, 2);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.list_cursor, 2);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.list_cursor, 1);

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.session.drawer().target(), Some(TodoId(2)));

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.drawer_open());
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn k_at_top_returns_to_form() {
        let mut app = demo_app();
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.focus, Focus::Form);
    }

    #[test]
    fn open_on_empty_list_does_nothing() {
        let mut app = empty_app();
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.drawer_open());
    }

    #[test]
    fn drawer_delete_removes_and_closes() {
        let mut app = demo_app();
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char('G')));
        handle_key(&mut app, key(KeyCode::Char('o')));
        assert_eq!(app.session.drawer().target(), Some(TodoId(1)));
        handle_key(&mut app, key(KeyCode::Char('d')));
        assert!(!app.drawer_open());
        assert_eq!(contents(&app), vec!["Deadlift\nLunge", "Bench press"]);
        assert_eq!(app.list_cursor, 1);
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Info));
    }

    #[test]
    fn drawer_edit_saves() {
        let mut app = demo_app();
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('e')));
        let edit = app.drawer_edit.as_ref().unwrap();
        assert_eq!(edit.id, TodoId(2));
        assert_eq!(edit.buffer.text(), "Bench press");

        for _ in 0.."press".len() {
            handle_key(&mut app, key(KeyCode::Backspace));
        }
        type_str(&mut app, "dips");
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(app.drawer_edit.is_none());
        assert!(!app.drawer_open());
        let record = app.session.todos().get(TodoId(2)).unwrap();
        assert_eq!(record.content, "Bench dips");
        assert_eq!(record.created_at, FIXED_NOW);
    }

    #[test]
    fn drawer_edit_rejects_empty() {
        let mut app = demo_app();
        app.session
            .dispatch(UiEvent::OpenOptionsFor(TodoId(3)))
            .unwrap();
        handle_key(&mut app, key(KeyCode::Char('e')));
        for _ in 0..20 {
            handle_key(&mut app, key(KeyCode::Backspace));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.drawer_edit.is_some());
        assert!(app.drawer_open());
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some(EMPTY_CONTENT_PROMPT)
        );
        assert_eq!(
            app.session.todos().get(TodoId(3)).unwrap().content,
            "Deadlift\nLunge"
        );
    }

    #[test]
    fn drawer_edit_esc_cancels_but_keeps_drawer() {
        let mut app = demo_app();
        app.session
            .dispatch(UiEvent::OpenOptionsFor(TodoId(1)))
            .unwrap();
        handle_key(&mut app, key(KeyCode::Char('e')));
        type_str(&mut app, "!!");
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.drawer_edit.is_none());
        assert!(app.drawer_open());
        assert_eq!(app.session.todos().get(TodoId(1)).unwrap().content, "Squats");
    }

    #[test]
    fn paste_goes_to_active_buffer() {
        let mut app = demo_app();
        handle_paste(&mut app, "Row\r\nPull-up");
        assert_eq!(app.form.text(), "Row\nPull-up");

        app.session
            .dispatch(UiEvent::OpenOptionsFor(TodoId(1)))
            .unwrap();
        handle_paste(&mut app, "ignored");
        assert_eq!(app.form.text(), "Row\nPull-up");

        handle_key(&mut app, key(KeyCode::Char('e')));
        handle_paste(&mut app, " x");
        assert_eq!(app.drawer_edit.as_ref().unwrap().buffer.text(), "Squats x");
    }

    #[test]
    fn help_toggles_and_swallows_keys() {
        let mut app = demo_app();
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.list_cursor, 0);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
        handle_key(&mut app, key(KeyCode::F(1)));
        assert!(app.show_help);
    }

    #[test]
    fn apply_edit_key_reports_unhandled() {
        let mut buf = InputBuffer::new();
        assert!(!apply_edit_key(&mut buf, key(KeyCode::Tab)));
        assert!(apply_edit_key(&mut buf, key(KeyCode::Char('x'))));
        assert!(!apply_edit_key(&mut buf, key(KeyCode::Up)));
    }
}
