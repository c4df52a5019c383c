use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::todo::TodoRecord;
use crate::tui::app::{App, Focus};

use super::helpers::{display_width, wrap_to_width};

/// Columns taken by the marker, check glyph and divider: "▌✓ │ "
const BODY_PREFIX_W: usize = 5;
/// Columns taken by the options glyph: " ⋮"
const BODY_SUFFIX_W: usize = 2;

/// Render the count line and the list of to-do cards, newest first
pub fn render_todo_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    if area.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // count
            Constraint::Min(0),    // cards
        ])
        .split(area);

    let count_line = Line::from(vec![
        Span::styled(" To-dos: ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            app.todo_count().to_string(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(count_line).style(Style::default().bg(bg)),
        chunks[0],
    );

    let list_area = chunks[1];
    if list_area.height == 0 {
        return;
    }

    if app.todo_count() == 0 {
        let empty = Paragraph::new(" Nothing to do yet")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, list_area);
        return;
    }

    // Build every card, remembering which rows belong to the cursor card
    let width = list_area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_rows = 0..0;
    for (i, record) in app.session.todos().iter().enumerate() {
        let start = lines.len();
        push_card(&mut lines, app, i, record, width);
        if i == app.list_cursor {
            cursor_rows = start..lines.len();
        }
        lines.push(Line::from(""));
    }

    // Keep the cursor card in view
    let visible = list_area.height as usize;
    let mut scroll = app.list_scroll.min(lines.len().saturating_sub(1));
    if cursor_rows.start < scroll {
        scroll = cursor_rows.start;
    } else if cursor_rows.end > scroll + visible {
        scroll = (cursor_rows.end - visible).min(cursor_rows.start);
    }
    app.list_scroll = scroll;

    let visible_lines: Vec<Line> = lines.into_iter().skip(scroll).take(visible).collect();
    let paragraph = Paragraph::new(visible_lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, list_area);
}

/// One card: a chip row (number, date) and the content body
fn push_card<'a>(
    lines: &mut Vec<Line<'a>>,
    app: &App,
    index: usize,
    record: &TodoRecord,
    width: usize,
) {
    let bg = app.theme.background;
    let selected = app.focus == Focus::List && index == app.list_cursor;
    let drawer_target = app.session.drawer().target() == Some(record.id);
    let body_bg = if selected || drawer_target {
        app.theme.selection_bg
    } else {
        bg
    };
    let marker = if selected {
        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg))
    } else {
        Span::styled(" ", Style::default().bg(bg))
    };

    // Chip row
    let chip_style = Style::default()
        .fg(app.theme.text)
        .bg(app.theme.chip_bg)
        .add_modifier(Modifier::BOLD);
    let date_style = Style::default()
        .fg(app.theme.blue)
        .bg(app.theme.chip_bg)
        .add_modifier(Modifier::BOLD);
    lines.push(Line::from(vec![
        marker.clone(),
        Span::styled(format!(" No. {} ", record.id), chip_style),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(format!(" Date: {} ", record.created_at), date_style),
    ]));

    // Body rows
    let body_w = width.saturating_sub(BODY_PREFIX_W + BODY_SUFFIX_W).max(1);
    let segments: Vec<String> = record
        .lines()
        .flat_map(|l| wrap_to_width(l, body_w))
        .collect();
    let check_style = Style::default()
        .fg(app.theme.check_color(index))
        .bg(body_bg)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.dim).bg(body_bg);
    let text_style = if selected {
        Style::default().fg(app.theme.text_bright).bg(body_bg)
    } else {
        Style::default().fg(app.theme.text).bg(body_bg)
    };

    for (j, segment) in segments.into_iter().enumerate() {
        let seg_w = display_width(&segment);
        let mut spans = vec![marker.clone()];
        if j == 0 {
            spans.push(Span::styled("\u{2713}", check_style));
        } else {
            spans.push(Span::styled(" ", Style::default().bg(body_bg)));
        }
        spans.push(Span::styled(" \u{2502} ", divider_style));
        spans.push(Span::styled(segment, text_style));
        spans.push(Span::styled(
            " ".repeat(body_w.saturating_sub(seg_w)),
            Style::default().bg(body_bg),
        ));
        if j == 0 {
            spans.push(Span::styled(
                " \u{22EE}",
                Style::default().fg(app.theme.dim).bg(body_bg),
            ));
        }
        lines.push(Line::from(spans));
    }
}
