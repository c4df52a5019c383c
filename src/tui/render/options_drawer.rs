use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::{fit_width, input_view};
use super::todo_form::input_rows;

/// Height of the drawer including its border
pub fn drawer_height(app: &App) -> u16 {
    match &app.drawer_edit {
        // input rows + hint row + borders
        Some(edit) => input_rows(&edit.buffer) as u16 + 3,
        // preview, actions, hint + borders
        None => 5,
    }
}

/// Render the options drawer anchored to the bottom of `area`
pub fn render_options_drawer(frame: &mut Frame, app: &App, area: Rect) {
    let Some(id) = app.session.drawer().target() else {
        return;
    };
    let height = drawer_height(app).min(area.height);
    if height == 0 {
        return;
    }
    let drawer_area = Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    };
    frame.render_widget(Clear, drawer_area);

    let bg = app.theme.drawer_bg;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .title(Span::styled(format!(" Options for to-do #{} ", id), header_style))
        .style(Style::default().bg(bg));
    let inner = block.inner(drawer_area);
    frame.render_widget(block, drawer_area);
    let width = inner.width as usize;

    if let Some(edit) = &app.drawer_edit {
        let rows = input_rows(&edit.buffer);
        let view = input_view(&edit.buffer, rows, width);
        let bright = Style::default().fg(app.theme.text_bright).bg(bg);
        let mut lines: Vec<Line> = view
            .lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, bright)))
            .collect();
        lines.push(Line::from(Span::styled(
            "Enter save  Alt+Enter new line  Esc cancel",
            dim_style,
        )));
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
        if !app.show_help {
            frame.set_cursor_position(Position::new(
                inner.x + view.cursor.0,
                inner.y + view.cursor.1,
            ));
        }
        return;
    }

    let preview = match app.session.drawer_record() {
        Some(record) => {
            let first = record.lines().next().unwrap_or("");
            let more = if record.content.contains('\n') { " \u{2026}" } else { "" };
            format!("{}{}", fit_width(first, width.saturating_sub(2)), more)
        }
        None => "(removed)".to_string(),
    };
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(preview, text_style)),
        Line::from(vec![
            Span::styled("e", key_style),
            Span::styled(" Edit    ", text_style),
            Span::styled("d", key_style),
            Span::styled(" Delete", text_style),
        ]),
        Line::from(Span::styled("Esc close", dim_style)),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}
