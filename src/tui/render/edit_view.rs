use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

const INPUT_PROMPT: &str = "> ";

/// The "new task" and "edit task" screens
pub fn render_edit_view(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.mode == Mode::Editing {
        "Edit task:"
    } else {
        "Create a new task:"
    };

    let input_line = if app.task_input.is_empty() {
        Line::from(vec![
            Span::styled(INPUT_PROMPT, Style::default().fg(app.theme.selected)),
            Span::styled(
                "Buy milk @grocery !high",
                Style::default().fg(app.theme.dim),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(INPUT_PROMPT, Style::default().fg(app.theme.selected)),
            Span::styled(
                app.task_input.value().to_string(),
                Style::default().fg(app.theme.text),
            ),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        input_line,
        Line::default(),
        Line::from(Span::styled(
            "(esc to cancel, enter to save)",
            Style::default().fg(app.theme.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);

    if area.height > 1 {
        let x = area.x as usize + INPUT_PROMPT.len() + app.task_input.cursor_width();
        frame.set_cursor_position((x.min(u16::MAX as usize) as u16, area.y + 1));
    }
}

/// Confirmation prompt shown in place of the list
pub fn render_delete_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let title = app
        .pending_delete
        .as_ref()
        .map_or("", |pending| pending.title.as_str());
    let line = Line::from(Span::styled(
        format!("  Delete \"{}\"? (y/n)", title),
        Style::default()
            .fg(app.theme.warn)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use crate::model::task::Priority;
    use crate::test_support::task;
    use crate::tui::app::{Mode, PendingDelete};
    use crate::tui::render::test_helpers::{TERM_H, TERM_W, app_with, render_app};

    #[test]
    fn test_add_screen() {
        let mut app = app_with(vec![]);
        app.mode = Mode::Adding;
        let out = render_app(&mut app, TERM_W, TERM_H);
        assert!(out.contains(" Create a new task:"));
        assert!(out.contains(" > Buy milk @grocery !high"));
        assert!(out.contains("(esc to cancel, enter to save)"));
    }

    #[test]
    fn test_edit_screen_shows_buffer() {
        let mut app = app_with(vec![]);
        app.mode = Mode::Editing;
        app.task_input.set_value("Fix bike @home");
        let out = render_app(&mut app, TERM_W, TERM_H);
        assert!(out.contains(" Edit task:"));
        assert!(out.contains(" > Fix bike @home"));
    }

    #[test]
    fn test_delete_prompt_replaces_list() {
        let mut app = app_with(vec![task("a", "Buy milk", false, Priority::High, 1)]);
        app.mode = Mode::Deleting;
        app.pending_delete = Some(PendingDelete {
            task_id: "a".into(),
            title: "Buy milk".into(),
        });
        let out = render_app(&mut app, TERM_W, TERM_H);
        assert!(out.contains("   Delete \"Buy milk\"? (y/n)"));
        assert!(!out.contains("[ ]"));
    }
}
