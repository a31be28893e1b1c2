use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::io::store_io::{StoreError, TaskRepository};
use crate::model::task::Task;

/// The in-memory task collection, in insertion order.
///
/// Every public method takes the lock for its whole duration, so callers on
/// different threads always observe a complete collection. Persistence is
/// explicit: mutating calls never save on their own, call [`TaskStore::save`]
/// afterwards.
pub struct TaskStore {
    tasks: Mutex<Vec<Task>>,
    repository: Box<dyn TaskRepository>,
}

impl TaskStore {
    /// An empty store backed by `repository` (nothing is read)
    pub fn new(repository: Box<dyn TaskRepository>) -> Self {
        Self::with_tasks(repository, Vec::new())
    }

    /// A store pre-filled with `tasks`
    pub fn with_tasks(repository: Box<dyn TaskRepository>, tasks: Vec<Task>) -> Self {
        TaskStore {
            tasks: Mutex::new(tasks),
            repository,
        }
    }

    /// Read the saved collection from `repository`
    pub fn load(repository: Box<dyn TaskRepository>) -> Result<Self, StoreError> {
        let tasks = repository.load()?;
        log::info!("loaded {} tasks from {}", tasks.len(), repository.describe());
        Ok(Self::with_tasks(repository, tasks))
    }

    // Tasks are plain values; a poisoned lock still guards a whole Vec.
    fn lock(&self) -> MutexGuard<'_, Vec<Task>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the whole collection
    pub fn snapshot(&self) -> Vec<Task> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Append a task, assigning a fresh id if it has none. Returns the id.
    pub fn add(&self, mut task: Task) -> String {
        if task.id.is_empty() {
            task.id = uuid::Uuid::new_v4().to_string();
        }
        let id = task.id.clone();
        log::info!("add task {}", id);
        self.lock().push(task);
        id
    }

    /// Flip `done` at `index`. Out of range is a no-op and returns false.
    pub fn toggle(&self, index: usize) -> bool {
        match self.lock().get_mut(index) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    /// Remove the task at `index`, shifting later tasks down.
    /// Out of range is a no-op and returns `None`.
    pub fn delete(&self, index: usize) -> Option<Task> {
        let mut tasks = self.lock();
        if index < tasks.len() {
            Some(tasks.remove(index))
        } else {
            None
        }
    }

    /// Current position of the task with `id`
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.lock().iter().position(|t| t.id == id)
    }

    /// Look up a task by id
    pub fn get(&self, id: &str) -> Option<Task> {
        self.lock().iter().find(|t| t.id == id).cloned()
    }

    /// Flip `done` on the task with `id`. Returns false if no such task.
    pub fn toggle_by_id(&self, id: &str) -> bool {
        match self.lock().iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                log::info!("toggle task {} -> done={}", id, task.done);
                true
            }
            None => false,
        }
    }

    /// Remove the task with `id`
    pub fn delete_by_id(&self, id: &str) -> Option<Task> {
        let mut tasks = self.lock();
        let index = tasks.iter().position(|t| t.id == id)?;
        log::info!("delete task {}", id);
        Some(tasks.remove(index))
    }

    /// Overwrite title, category and priority of the task with `id` from
    /// `edited`. Id, done flag and creation time are kept.
    pub fn update_by_id(&self, id: &str, edited: &Task) -> bool {
        match self.lock().iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = edited.title.clone();
                task.category = edited.category.clone();
                task.priority = edited.priority;
                log::info!("edit task {}", id);
                true
            }
            None => false,
        }
    }

    /// Write the current collection to the repository.
    ///
    /// The lock is held while writing, so the saved file always matches a
    /// state that existed in memory. A failed save leaves memory untouched.
    pub fn save(&self) -> Result<(), StoreError> {
        let tasks = self.lock();
        self.repository.save(&tasks).inspect_err(|e| {
            log::error!("save failed: {}", e);
        })
    }

    /// Where the tasks are persisted
    pub fn describe(&self) -> String {
        self.repository.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_task;
    use crate::test_support::MemoryRepository;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn store_with(titles: &[&str]) -> TaskStore {
        let store = TaskStore::new(Box::new(MemoryRepository::default()));
        for title in titles {
            store.add(parse_task(title));
        }
        store
    }

    #[test]
    fn test_add_assigns_id_and_appends() {
        let store = store_with(&["one", "two"]);
        let tasks = store.snapshot();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].title, "two");
        assert!(!tasks[0].id.is_empty());
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn test_add_keeps_existing_id() {
        let store = store_with(&[]);
        let mut task = parse_task("keep");
        task.id = "20240101120000".into();
        assert_eq!(store.add(task), "20240101120000");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let store = store_with(&["a"]);
        let id = store.snapshot()[0].id.clone();
        assert!(store.toggle_by_id(&id));
        assert!(store.get(&id).unwrap().done);
        assert!(store.toggle_by_id(&id));
        assert!(!store.get(&id).unwrap().done);

        assert!(store.toggle(0));
        assert!(store.toggle(0));
        assert!(!store.snapshot()[0].done);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let store = store_with(&["a", "b"]);
        let before = store.snapshot();
        assert!(!store.toggle(2));
        assert!(store.delete(5).is_none());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_delete_shifts_positions() {
        let store = store_with(&["a", "b", "c"]);
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.title, "b");
        let titles: Vec<_> = store.snapshot().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_position_of_tracks_deletes() {
        let store = store_with(&["a", "b", "c"]);
        let ids: Vec<String> = store.snapshot().into_iter().map(|t| t.id).collect();
        assert_eq!(store.position_of(&ids[2]), Some(2));
        store.delete_by_id(&ids[0]);
        assert_eq!(store.position_of(&ids[2]), Some(1));
        assert_eq!(store.position_of(&ids[0]), None);
        assert_eq!(store.position_of("missing"), None);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let store = store_with(&["a"]);
        assert!(!store.toggle_by_id("missing"));
        assert!(store.delete_by_id("missing").is_none());
        assert!(!store.update_by_id("missing", &parse_task("x")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_preserves_identity_fields() {
        let store = store_with(&["old @home !low"]);
        let original = store.snapshot()[0].clone();
        store.toggle(0);

        assert!(store.update_by_id(&original.id, &parse_task("new title @work !high")));
        let updated = store.get(&original.id).unwrap();
        assert_eq!(updated.title, "new title");
        assert_eq!(updated.category.as_deref(), Some("work"));
        assert_eq!(updated.priority, crate::model::Priority::High);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.done);
    }

    #[test]
    fn test_save_writes_snapshot() {
        let repo = MemoryRepository::default();
        let store = TaskStore::new(Box::new(repo.clone()));
        store.add(parse_task("persist me"));
        store.save().unwrap();
        assert_eq!(repo.saved().len(), 1);
        assert_eq!(repo.saved()[0].title, "persist me");
    }

    #[test]
    fn test_failed_save_keeps_memory() {
        let store = TaskStore::new(Box::new(MemoryRepository::failing()));
        store.add(parse_task("still here"));
        assert!(store.save().is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_reads_repository() {
        let repo = MemoryRepository::with_tasks(vec![parse_task("from disk")]);
        let store = TaskStore::load(Box::new(repo)).unwrap();
        assert_eq!(store.snapshot()[0].title, "from disk");
    }

    #[test]
    fn test_concurrent_adds_are_all_kept() {
        let store = Arc::new(store_with(&[]));
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.add(parse_task(&format!("t{}-{}", n, i)));
                        let _ = store.snapshot();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let tasks = store.snapshot();
        assert_eq!(tasks.len(), 400);
        let ids: HashSet<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 400);
    }
}
