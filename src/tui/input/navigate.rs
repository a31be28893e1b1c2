use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::parse::format_task;
use crate::tui::app::{App, Mode, PendingDelete};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_quit = true,
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => app.should_quit = true,

        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => {
            app.cursor += 1; // clamped after dispatch
        }

        (_, KeyCode::Char(' ')) => toggle_selected(app),
        (_, KeyCode::Char('n')) => {
            app.task_input.clear();
            app.mode = Mode::Adding;
        }
        (_, KeyCode::Char('e')) => begin_edit(app),
        (_, KeyCode::Char('d')) => begin_delete(app),
        (_, KeyCode::Char('/')) => {
            app.search_input.clear();
            app.mode = Mode::Searching;
        }

        (_, KeyCode::Char('s')) => app.sort = app.sort.cycle(),
        (_, KeyCode::Char('g')) => {
            app.group = app.group.cycle();
            app.cursor = 0;
        }
        (_, KeyCode::Char('c')) => {
            app.show_done = !app.show_done;
            app.cursor = 0;
        }
        _ => {}
    }
}

/// Flip the selected task, looked up by id so a reordered view can't hit
/// the wrong row.
fn toggle_selected(app: &mut App) {
    let Some(task) = app.selected_task() else {
        return;
    };
    if app.store.toggle_by_id(&task.id) {
        app.persist();
    }
}

fn begin_edit(app: &mut App) {
    let Some(task) = app.selected_task() else {
        return;
    };
    app.task_input.set_value(&format_task(&task));
    app.edit_target = Some(task.id);
    app.mode = Mode::Editing;
}

fn begin_delete(app: &mut App) {
    let Some(task) = app.selected_task() else {
        return;
    };
    app.pending_delete = Some(PendingDelete {
        task_id: task.id,
        title: task.title,
    });
    app.mode = Mode::Deleting;
}
