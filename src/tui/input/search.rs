use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// The filter follows the buffer on every key; Enter keeps the query,
/// Esc drops it.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_input.clear();
            app.mode = Mode::Browsing;
            app.cursor = 0;
        }
        KeyCode::Enter => {
            app.mode = Mode::Browsing;
            app.cursor = 0;
        }
        _ => {
            app.search_input.handle_key(key);
        }
    }
}
