use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::config::AtlasConfig;
use crate::model::task::Task;
use crate::ops::store::TaskStore;
use crate::test_support::MemoryRepository;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole app screen
pub fn render_app(app: &mut App, w: u16, h: u16) -> String {
    render_to_string(w, h, |frame, _| super::render(frame, app))
}

/// App over an in-memory store with default config
pub fn app_with(tasks: Vec<Task>) -> App {
    let store = TaskStore::with_tasks(Box::new(MemoryRepository::default()), tasks);
    App::new(store, &AtlasConfig::default())
}
