pub mod app_bar;
pub mod help_overlay;
pub mod options_drawer;
pub mod status_row;
pub mod todo_form;
pub mod todo_list;

mod helpers;
#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: app bar (2 rows) | form | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                         // app bar + separator
            Constraint::Length(todo_form::form_height(app)), // new to-do form
            Constraint::Min(1),                            // list
            Constraint::Length(1),                         // status row
        ])
        .split(area);

    app_bar::render_app_bar(frame, app, chunks[0]);
    todo_form::render_todo_form(frame, app, chunks[1]);
    todo_list::render_todo_list(frame, app, chunks[2]);

    // Drawer slides over the bottom of the list
    if app.drawer_open() {
        options_drawer::render_options_drawer(frame, app, chunks[2]);
    }

    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
