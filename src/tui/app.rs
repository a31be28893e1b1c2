use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::workspace::Workspace;
use crate::model::config::AtlasConfig;
use crate::model::task::Task;
use crate::ops::store::TaskStore;
use crate::ops::view::{GroupMode, SortMode, ViewOptions, compute_view};

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Maximum length of a task line typed in the add/edit screens
pub const TASK_INPUT_LIMIT: usize = 156;
/// Maximum length of the search query
pub const SEARCH_INPUT_LIMIT: usize = 50;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Adding,
    Editing,
    Searching,
    Deleting,
}

/// Task awaiting delete confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub task_id: String,
    pub title: String,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Index of the selected row in the visible list
    pub cursor: usize,
    /// First visible line of the task list (set by the renderer)
    pub scroll_offset: usize,
    pub show_done: bool,
    pub sort: SortMode,
    pub group: GroupMode,
    /// Buffer for the add and edit screens
    pub task_input: TextInput,
    pub search_input: TextInput,
    pub pending_delete: Option<PendingDelete>,
    /// Id of the task being edited
    pub edit_target: Option<String>,
    /// One-shot message shown in the status row, cleared on the next key
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl App {
    pub fn new(store: TaskStore, config: &AtlasConfig) -> Self {
        App {
            store,
            mode: Mode::Browsing,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            cursor: 0,
            scroll_offset: 0,
            show_done: config.ui.show_done,
            sort: SortMode::default(),
            group: GroupMode::default(),
            task_input: TextInput::new(TASK_INPUT_LIMIT),
            search_input: TextInput::new(SEARCH_INPUT_LIMIT),
            pending_delete: None,
            edit_target: None,
            status_message: None,
            status_is_error: false,
        }
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            search: self.search_input.value().to_string(),
            show_done: self.show_done,
            sort: self.sort,
            group: self.group,
        }
    }

    /// Tasks in display order, recomputed from the store
    pub fn visible_tasks(&self) -> Vec<Task> {
        compute_view(&self.store.snapshot(), &self.view_options())
    }

    pub fn selected_task(&self) -> Option<Task> {
        self.visible_tasks().into_iter().nth(self.cursor)
    }

    /// Keep the cursor on a visible row (0 when the list is empty)
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_tasks().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Write the store to disk. A failure is reported in the status row and
    /// the session carries on with the in-memory state. Returns true on success.
    pub fn persist(&mut self) -> bool {
        match self.store.save() {
            Ok(()) => true,
            Err(e) => {
                self.set_error(format!("Save failed: {}", e));
                false
            }
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }
}

/// Run the interactive session until the user quits
pub fn run(workspace: Workspace) -> Result<(), Box<dyn std::error::Error>> {
    let Workspace { config, store, .. } = workspace;
    let mut app = App::new(store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("TUI closed with {} tasks", app.store.len());
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
