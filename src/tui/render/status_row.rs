use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::spans_width;

/// Where the tasks are saved
pub fn render_storage_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        format!("Storage: {}", app.store.describe()),
        Style::default().fg(app.theme.dim),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Browsing => {
            "space toggle  n new  e edit  / search  d del  g group  s sort  c done  q quit"
        }
        Mode::Searching => "enter keep filter  esc clear",
        Mode::Deleting => "y/enter delete  n/esc keep",
        Mode::Adding | Mode::Editing => "enter save  esc cancel  ctrl-u clear",
    }
}

/// Render the status row (bottom of screen): the last status message on the
/// left and key hints on the right when they fit
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(message) = &app.status_message {
        let color = if app.status_is_error {
            app.theme.warn
        } else {
            app.theme.text
        };
        spans.push(Span::styled(message.clone(), Style::default().fg(color)));
    }

    let hint = key_hints(app.mode);
    let content_width = spans_width(&spans);
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
