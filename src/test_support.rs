//! Shared helpers for unit tests.

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{Local, TimeZone};

use crate::io::store_io::{StoreError, TaskRepository};
use crate::model::task::{Priority, Task};

/// Repository that keeps the last saved collection in memory.
/// Clones share the same storage so tests can inspect what was saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    initial: Vec<Task>,
    saved: Arc<Mutex<Vec<Task>>>,
    saves: Arc<Mutex<usize>>,
    fail: bool,
}

impl MemoryRepository {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        MemoryRepository {
            initial: tasks,
            ..Default::default()
        }
    }

    /// A repository whose every save fails
    pub fn failing() -> Self {
        MemoryRepository {
            fail: true,
            ..Default::default()
        }
    }

    pub fn saved(&self) -> Vec<Task> {
        self.saved.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl TaskRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.initial.clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        *self.saves.lock().unwrap() += 1;
        if self.fail {
            return Err(StoreError::WriteError {
                path: PathBuf::from("/memory/todo.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.saved.lock().unwrap() = tasks.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Build a task with fixed fields; `day` is the day of March 2024 it was created.
pub fn task(id: &str, title: &str, done: bool, priority: Priority, day: u32) -> Task {
    let mut task = Task::new(title);
    task.id = id.to_string();
    task.done = done;
    task.priority = priority;
    task.created_at = Local
        .with_ymd_and_hms(2024, 3, day, 9, 30, 0)
        .single()
        .unwrap()
        .fixed_offset();
    task
}

/// Same as [`task`] with a category
pub fn task_in(id: &str, title: &str, category: &str, priority: Priority, day: u32) -> Task {
    let mut t = task(id, title, false, priority, day);
    t.category = Some(category.to_string());
    t
}
