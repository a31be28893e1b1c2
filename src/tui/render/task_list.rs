use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::task::Task;
use crate::ops::view::group_runs;
use crate::tui::app::App;

use super::helpers::{checkbox, search_regex};
use super::push_highlighted_spans;

/// Render the visible tasks with group headers, scrolled so the cursor row
/// is on screen.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let view = app.visible_tasks();
    if view.is_empty() {
        app.scroll_offset = 0;
        let empty = Line::from(Span::styled(
            "  No tasks found.",
            Style::default().fg(app.theme.dim),
        ));
        frame.render_widget(Paragraph::new(empty), area);
        return;
    }

    let search_re = search_regex(app.search_input.value());
    let runs = group_runs(&view, app.group);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;
    for (i, task) in view.iter().enumerate() {
        if let Some((key, _)) = runs.iter().find(|(_, range)| range.start == i) {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", key.label()),
                Style::default()
                    .fg(app.theme.group_header)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        let selected = i == app.cursor;
        if selected {
            cursor_line = lines.len();
        }
        lines.push(task_row(app, task, selected, search_re.as_ref()));
    }

    let height = area.height as usize;
    app.scroll_offset = scroll_for(app.scroll_offset, cursor_line, height, lines.len());

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(height)
        .collect();
    frame.render_widget(Paragraph::new(visible), area);
}

/// Smallest scroll change that keeps `cursor_line` inside the window
fn scroll_for(offset: usize, cursor_line: usize, height: usize, total: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let offset = offset.min(total.saturating_sub(height));
    if cursor_line < offset {
        cursor_line
    } else if cursor_line >= offset + height {
        cursor_line + 1 - height
    } else {
        offset
    }
}

/// `> [x] title (@category) (YYYY-MM-DD HH:MM)`
fn task_row<'a>(app: &App, task: &Task, selected: bool, search_re: Option<&Regex>) -> Line<'a> {
    let theme = &app.theme;
    let mut base = if task.done {
        Style::default()
            .fg(theme.done)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text)
    };
    if selected {
        base = base.fg(theme.selected).add_modifier(Modifier::BOLD);
    }
    let highlight = base.fg(theme.search_match).add_modifier(Modifier::UNDERLINED);

    let prefix = if selected { " > " } else { "    " };
    let mut spans = vec![Span::styled(
        format!("{}{} ", prefix, checkbox(task.done)),
        base,
    )];
    push_highlighted_spans(&mut spans, &task.title, base, highlight, search_re);

    if let Some(category) = &task.category {
        let style = if task.done {
            base
        } else {
            Style::default().fg(theme.category)
        };
        spans.push(Span::styled(format!(" (@{})", category), style));
    }

    let date_style = if task.done {
        base
    } else {
        Style::default().fg(theme.dim)
    };
    spans.push(Span::styled(
        format!(" ({})", task.created_at.format("%Y-%m-%d %H:%M")),
        date_style,
    ));

    Line::from(spans)
}
