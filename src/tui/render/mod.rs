pub mod edit_view;
mod helpers;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use super::app::{App, Mode};

/// Main render function: header, then the mode's content, then the footer
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area().inner(Margin {
        horizontal: 1,
        vertical: 0,
    });

    match app.mode {
        Mode::Adding | Mode::Editing => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // header + gap
                    Constraint::Min(1),    // input screen
                    Constraint::Length(1), // status row
                ])
                .split(area);
            render_header(frame, app, chunks[0]);
            edit_view::render_edit_view(frame, app, chunks[1]);
            status_row::render_status_row(frame, app, chunks[2]);
        }
        Mode::Browsing | Mode::Searching | Mode::Deleting => {
            let show_search = app.mode == Mode::Searching || !app.search_input.is_empty();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),                         // header
                    Constraint::Length(u16::from(show_search)),    // search bar
                    Constraint::Length(1),                         // gap
                    Constraint::Min(1),                            // list or prompt
                    Constraint::Length(1),                         // storage footer
                    Constraint::Length(1),                         // status row
                ])
                .split(area);
            render_header(frame, app, chunks[0]);
            if show_search {
                render_search_bar(frame, app, chunks[1]);
            }
            if app.mode == Mode::Deleting {
                edit_view::render_delete_prompt(frame, app, chunks[3]);
            } else {
                task_list::render_task_list(frame, app, chunks[3]);
            }
            status_row::render_storage_footer(frame, app, chunks[4]);
            status_row::render_status_row(frame, app, chunks[5]);
        }
    }
}

/// Title badge followed by the active view settings
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " Atlas Todo ",
        Style::default()
            .fg(app.theme.title_fg)
            .bg(app.theme.title_bg)
            .add_modifier(Modifier::BOLD),
    )];
    let parts = helpers::status_parts(app);
    if !parts.is_empty() {
        spans.push(Span::styled(
            format!(" [{}]", parts.join(", ")),
            Style::default().fg(app.theme.dim),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let prompt = "Search: ";
    let mut spans = vec![Span::styled(prompt, Style::default().fg(app.theme.dim))];
    if app.search_input.is_empty() {
        spans.push(Span::styled(
            "Search tasks...",
            Style::default().fg(app.theme.dim),
        ));
    } else {
        spans.push(Span::styled(
            app.search_input.value().to_string(),
            Style::default().fg(app.theme.text),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if app.mode == Mode::Searching {
        let x = area.x as usize + prompt.len() + app.search_input.cursor_width();
        frame.set_cursor_position((x.min(u16::MAX as usize) as u16, area.y));
    }
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if last_end < text.len() || text.is_empty() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
