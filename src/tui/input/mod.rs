mod confirm;
mod edit;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use confirm::handle_confirm;
use edit::handle_edit;
use navigate::handle_navigate;
use search::handle_search;

/// Handle a key event in the current mode.
///
/// Every mutation is saved before this returns, so the next key always
/// sees the persisted state.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.clear_status();

    match app.mode {
        Mode::Browsing => handle_navigate(app, key),
        Mode::Adding | Mode::Editing => handle_edit(app, key),
        Mode::Searching => handle_search(app, key),
        Mode::Deleting => handle_confirm(app, key),
    }

    app.clamp_cursor();
}
