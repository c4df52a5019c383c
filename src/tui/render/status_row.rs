use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus, StatusKind};

/// Key hints for the current context
pub fn key_hints(app: &App) -> &'static str {
    if app.show_help {
        "Esc close help"
    } else if app.drawer_edit.is_some() {
        "Enter save  Alt+Enter new line  Esc cancel"
    } else if app.drawer_open() {
        "e edit  d delete  Esc close"
    } else {
        match app.focus {
            Focus::Form => "Enter add  Alt+Enter new line  Tab list  F1 help",
            Focus::List => "j/k move  Enter options  Tab form  ? help  q quit",
        }
    }
}

/// Render the status row (bottom of screen): a pending message, else key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = match &app.status {
        Some(msg) => {
            let color = match msg.kind {
                StatusKind::Warning => app.theme.yellow,
                StatusKind::Info => app.theme.green,
            };
            Line::from(Span::styled(
                format!(" {}", msg.text),
                Style::default().fg(color).bg(bg),
            ))
        }
        None if app.show_key_hints => Line::from(Span::styled(
            format!(" {}", key_hints(app)),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        None => Line::from(""),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
