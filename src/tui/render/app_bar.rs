use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

use super::helpers::display_width;

const MENU_GLYPH: &str = " \u{2261}";
const LOGO: &str = "todopad";
const WRITE_LABEL: &str = "Write ";

/// Render the app bar (menu glyph, logo, write label) with a separator below
pub fn render_app_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // bar
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let width = area.width as usize;
    let left_w = display_width(MENU_GLYPH);
    let logo_w = display_width(LOGO);
    let right_w = display_width(WRITE_LABEL);

    let logo_start = width.saturating_sub(logo_w) / 2;
    let pad_left = logo_start.saturating_sub(left_w);
    let pad_right = width.saturating_sub(left_w + pad_left + logo_w + right_w);

    let write_style = if app.focus == Focus::Form && !app.drawer_open() {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let bar = Line::from(vec![
        Span::styled(MENU_GLYPH, Style::default().fg(app.theme.text).bg(bg)),
        Span::styled(" ".repeat(pad_left), Style::default().bg(bg)),
        Span::styled(
            LOGO,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(pad_right), Style::default().bg(bg)),
        Span::styled(WRITE_LABEL, write_style),
    ]);
    frame.render_widget(Paragraph::new(bar).style(Style::default().bg(bg)), chunks[0]);

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    frame.render_widget(Paragraph::new(separator), chunks[1]);
}
