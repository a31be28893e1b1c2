use crossterm::event::{KeyCode, KeyEvent};

use crate::parse::parse_task;
use crate::tui::app::{App, Mode};

/// Add and edit screens share the task input
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel_edit(app),
        KeyCode::Enter => confirm_edit(app),
        _ => {
            app.task_input.handle_key(key);
        }
    }
}

fn cancel_edit(app: &mut App) {
    app.task_input.clear();
    app.edit_target = None;
    app.mode = Mode::Browsing;
}

/// Parse the buffer into a new task or onto the edit target.
///
/// Text that is empty after trimming is treated as no input: nothing is
/// added or changed, and the screen returns to browsing.
fn confirm_edit(app: &mut App) {
    let text = app.task_input.value().trim().to_string();
    let target = app.edit_target.take();
    let adding = app.mode == Mode::Adding;
    app.task_input.clear();
    app.mode = Mode::Browsing;

    if text.is_empty() {
        return;
    }

    let parsed = parse_task(&text);
    if adding {
        app.store.add(parsed);
        app.cursor = 0;
        if app.persist() {
            app.set_status("Task added");
        }
        return;
    }

    let Some(id) = target else {
        return;
    };
    if app.store.update_by_id(&id, &parsed) {
        if app.persist() {
            app.set_status("Task updated");
        }
    } else {
        app.set_error("Task no longer exists");
    }
}
