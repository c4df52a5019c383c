use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};
use crate::tui::input_buffer::InputBuffer;

use super::helpers::input_view;

/// The input grows with its content up to this many rows, then scrolls
pub const MAX_INPUT_ROWS: usize = 4;

const PLACEHOLDER: &str = "What needs doing?";

pub(super) fn input_rows(buf: &InputBuffer) -> usize {
    buf.line_count().clamp(1, MAX_INPUT_ROWS)
}

/// Total height: bordered input plus the button row
pub fn form_height(app: &App) -> u16 {
    input_rows(&app.form) as u16 + 3
}

/// Render the new to-do form: a bordered multi-line input and an Add button
pub fn render_todo_form(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::Form && !app.drawer_open();
    let rows = input_rows(&app.form);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows as u16 + 2), // input box
            Constraint::Length(1),               // button
        ])
        .split(area);

    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(
            " New to-do ",
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    if app.form.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(placeholder, inner);
        if focused && !app.show_help {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
    } else {
        let view = input_view(&app.form, rows, inner.width as usize);
        let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
        let lines: Vec<Line> = view
            .lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, text_style)))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
        if focused && !app.show_help {
            frame.set_cursor_position(Position::new(
                inner.x + view.cursor.0,
                inner.y + view.cursor.1,
            ));
        }
    }

    let button_style = if focused {
        Style::default()
            .fg(app.theme.background)
            .bg(app.theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(app.theme.text)
            .bg(app.theme.chip_bg)
            .add_modifier(Modifier::BOLD)
    };
    let button = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(" Add ", button_style),
    ]);
    frame.render_widget(
        Paragraph::new(button).style(Style::default().bg(bg)),
        chunks[1],
    );
}
