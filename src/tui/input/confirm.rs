use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            let pending = app.pending_delete.take();
            app.mode = Mode::Browsing;
            if let Some(pending) = pending
                && app.store.delete_by_id(&pending.task_id).is_some()
                && app.persist()
            {
                app.set_status(format!("Deleted \"{}\"", pending.title));
            }
            // handle_key clamps the cursor to the shorter view
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
            app.pending_delete = None;
            app.mode = Mode::Browsing;
        }
        _ => {}
    }
}
